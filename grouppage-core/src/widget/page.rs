//! Full view of a group page

use std::sync::Arc;

use super::subscription::{GroupPageSubscriptionWidget, WidgetError};
use crate::core_group::group::Group;
use crate::core_group::viewer::Viewer;
use crate::render::{Layout, RenderElement};

/// Assembles the page title and the subscription widget
pub struct GroupPageBuilder {
    widget: GroupPageSubscriptionWidget,
    layout: Arc<dyn Layout>,
}

impl GroupPageBuilder {
    pub fn new(widget: GroupPageSubscriptionWidget, layout: Arc<dyn Layout>) -> Self {
        Self { widget, layout }
    }

    pub fn widget(&self) -> &GroupPageSubscriptionWidget {
        &self.widget
    }

    /// Build the full view mode of `group` for `viewer`
    pub fn build_full(&self, group: &Group, viewer: &Viewer) -> Result<RenderElement, WidgetError> {
        let mut elements = vec![self
            .layout
            .wrap_container_wide(self.layout.page_title(&group.title))];

        // Anonymous viewers never get the subscription container
        if viewer.is_authenticated() {
            if let Some(subscription) = self.widget.build(group, viewer)? {
                elements.push(self.layout.wrap_container_wide(subscription));
            }
        }

        let elements = self.layout.wrap_vertical_spacing_big(elements);
        Ok(self.layout.wrap_bottom_padding(elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::core_group::store::InMemoryMembershipStore;
    use crate::render::DefaultLayout;
    use crate::test_utils::*;

    fn builder(oracle: StaticAccessOracle) -> GroupPageBuilder {
        let widget = GroupPageSubscriptionWidget::new(
            Arc::new(oracle),
            Arc::new(InMemoryMembershipStore::new()),
            WidgetConfig::default(),
        );
        GroupPageBuilder::new(widget, Arc::new(DefaultLayout))
    }

    #[test]
    fn test_full_page_with_subscription() {
        let page = builder(StaticAccessOracle::allow())
            .build_full(&test_group(), &alice())
            .unwrap();

        assert!(page.has_class(DefaultLayout::BOTTOM_PADDING));
        match assert_some(page.find_container(DefaultLayout::VERTICAL_SPACING_BIG)) {
            RenderElement::Container { children, .. } => {
                assert_eq!(children.len(), 2);
                assert!(children
                    .iter()
                    .all(|c| c.has_class(DefaultLayout::CONTAINER_WIDE)));
            }
            other => panic!("Expected container, got {:?}", other),
        }
        assert_eq!(page.text_content()[0], "Test Group");
        assert!(page.find_container("group-subscription-ui").is_some());
    }

    #[test]
    fn test_full_page_for_anonymous_viewer() {
        let page = builder(StaticAccessOracle::allow())
            .build_full(&test_group(), &Viewer::anonymous())
            .unwrap();

        assert_eq!(page.text_content(), vec!["Test Group"]);
        assert!(page.links().is_empty());
    }

    #[test]
    fn test_full_page_without_access() {
        let page = builder(StaticAccessOracle::deny())
            .build_full(&test_group(), &alice())
            .unwrap();

        assert_eq!(page.text_content(), vec!["Test Group"]);
    }
}
