//! Custom assertions for tests
//!
//! The render-tree assertions mirror what a page-level test checks: visible
//! text and links by label.

use std::fmt::Debug;

use crate::render::RenderElement;

/// Assert that a Result is Ok and return the value
pub fn assert_ok<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok, got Err: {:?}", e),
    }
}

/// Assert that a Result is Err and return the error
pub fn assert_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
        Err(e) => e,
    }
}

/// Assert that an Option is Some and return the value
pub fn assert_some<T>(option: Option<T>) -> T {
    match option {
        Some(value) => value,
        None => panic!("Expected Some, got None"),
    }
}

/// Assert that an Option is None
pub fn assert_none<T: Debug>(option: Option<T>) {
    if let Some(value) = option {
        panic!("Expected None, got Some({:?})", value);
    }
}

/// Assert that some text node or link label contains `needle`
pub fn assert_text_contains(tree: &RenderElement, needle: &str) {
    if !tree.contains_text(needle) {
        panic!(
            "Expected page text to contain {:?}. Text: {:?}",
            needle,
            tree.text_content()
        );
    }
}

/// Assert that no text node or link label contains `needle`
pub fn assert_text_not_contains(tree: &RenderElement, needle: &str) {
    if tree.contains_text(needle) {
        panic!(
            "Expected page text not to contain {:?}. Text: {:?}",
            needle,
            tree.text_content()
        );
    }
}

/// Assert that a link with exactly this label exists
pub fn assert_link_exists(tree: &RenderElement, label: &str) {
    if tree.find_link(label).is_none() {
        panic!("Expected link {:?}. Links: {:?}", label, tree.links());
    }
}

/// Assert that no link with this label exists
pub fn assert_link_not_exists(tree: &RenderElement, label: &str) {
    if tree.find_link(label).is_some() {
        panic!("Expected no link {:?}. Links: {:?}", label, tree.links());
    }
}
