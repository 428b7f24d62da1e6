//! Page layout helpers

use super::element::RenderElement;

/// Wrapping helpers used to assemble a full page
pub trait Layout: Send + Sync {
    /// Page title element
    fn page_title(&self, title: &str) -> RenderElement;

    /// Wrap an element in a wide container
    fn wrap_container_wide(&self, element: RenderElement) -> RenderElement;

    /// Stack elements with big vertical spacing
    fn wrap_vertical_spacing_big(&self, elements: Vec<RenderElement>) -> RenderElement;

    /// Add bottom padding so the page clears the footer
    fn wrap_bottom_padding(&self, element: RenderElement) -> RenderElement;
}

/// CSS-class based layout
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLayout;

impl DefaultLayout {
    pub const CONTAINER_WIDE: &'static str = "container-wide";
    pub const VERTICAL_SPACING_BIG: &'static str = "vertical-spacing-big";
    pub const BOTTOM_PADDING: &'static str = "bottom-padding";
    pub const PAGE_TITLE: &'static str = "page-title";
}

impl Layout for DefaultLayout {
    fn page_title(&self, title: &str) -> RenderElement {
        RenderElement::container(&[Self::PAGE_TITLE], vec![RenderElement::heading(title)])
    }

    fn wrap_container_wide(&self, element: RenderElement) -> RenderElement {
        RenderElement::container(&[Self::CONTAINER_WIDE], vec![element])
    }

    fn wrap_vertical_spacing_big(&self, elements: Vec<RenderElement>) -> RenderElement {
        RenderElement::container(&[Self::VERTICAL_SPACING_BIG], elements)
    }

    fn wrap_bottom_padding(&self, element: RenderElement) -> RenderElement {
        RenderElement::container(&[Self::BOTTOM_PADDING], vec![element])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        let title = DefaultLayout.page_title("Test Group");
        assert!(title.has_class(DefaultLayout::PAGE_TITLE));
        assert_eq!(title.text_content(), vec!["Test Group"]);
    }

    #[test]
    fn test_wrappers_nest() {
        let layout = DefaultLayout;
        let page = layout.wrap_bottom_padding(layout.wrap_vertical_spacing_big(vec![
            layout.wrap_container_wide(RenderElement::paragraph("one")),
            layout.wrap_container_wide(RenderElement::paragraph("two")),
        ]));

        assert!(page.has_class(DefaultLayout::BOTTOM_PADDING));
        let spacing = page.find_container(DefaultLayout::VERTICAL_SPACING_BIG).unwrap();
        match spacing {
            RenderElement::Container { children, .. } => assert_eq!(children.len(), 2),
            other => panic!("Expected container, got {:?}", other),
        }
        assert_eq!(page.text_content(), vec!["one", "two"]);
    }
}
