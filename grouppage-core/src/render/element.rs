//! Typed render tree handed to the host templating layer

use super::route::Route;
use serde::{Deserialize, Serialize};

/// HTML tag used for a text node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    P,
    H1,
    Span,
}

/// A node of the render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderElement {
    Container {
        classes: Vec<String>,
        children: Vec<RenderElement>,
    },
    Text {
        tag: TextTag,
        value: String,
    },
    Link {
        label: String,
        route: Route,
    },
}

impl RenderElement {
    pub fn container(classes: &[&str], children: Vec<RenderElement>) -> Self {
        RenderElement::Container {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            children,
        }
    }

    pub fn paragraph(value: impl Into<String>) -> Self {
        RenderElement::Text {
            tag: TextTag::P,
            value: value.into(),
        }
    }

    pub fn heading(value: impl Into<String>) -> Self {
        RenderElement::Text {
            tag: TextTag::H1,
            value: value.into(),
        }
    }

    pub fn link(label: impl Into<String>, route: Route) -> Self {
        RenderElement::Link {
            label: label.into(),
            route,
        }
    }

    /// Whether this container carries `class`
    pub fn has_class(&self, class: &str) -> bool {
        match self {
            RenderElement::Container { classes, .. } => classes.iter().any(|c| c == class),
            _ => false,
        }
    }

    /// All text values and link labels in document order
    pub fn text_content(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RenderElement::Container { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            RenderElement::Text { value, .. } => out.push(value.as_str()),
            RenderElement::Link { label, .. } => out.push(label.as_str()),
        }
    }

    /// Whether any text node or link label contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_content().iter().any(|t| t.contains(needle))
    }

    /// All links as (label, route) in document order
    pub fn links(&self) -> Vec<(&str, &Route)> {
        let mut out = Vec::new();
        self.collect_links(&mut out);
        out
    }

    fn collect_links<'a>(&'a self, out: &mut Vec<(&'a str, &'a Route)>) {
        match self {
            RenderElement::Container { children, .. } => {
                for child in children {
                    child.collect_links(out);
                }
            }
            RenderElement::Link { label, route } => out.push((label.as_str(), route)),
            RenderElement::Text { .. } => {}
        }
    }

    /// Find the first link with exactly this label
    pub fn find_link(&self, label: &str) -> Option<&Route> {
        self.links()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, route)| route)
    }

    /// Find the first container carrying `class`, searching depth-first
    pub fn find_container(&self, class: &str) -> Option<&RenderElement> {
        if self.has_class(class) {
            return Some(self);
        }
        match self {
            RenderElement::Container { children, .. } => {
                children.iter().find_map(|c| c.find_container(class))
            }
            _ => None,
        }
    }
}
