//! Group page rendering
//!
//! - **GroupPageSubscriptionWidget**: decides and renders the subscription UI
//! - **GroupPageBuilder**: full page view composed from layout helpers

pub mod page;
pub mod subscription;

pub use page::GroupPageBuilder;
pub use subscription::{
    subscribe_message, GroupPageSubscriptionWidget, SubscriptionVariant, WidgetError,
    ALREADY_MEMBER_MESSAGE, LEAVE_LINK_LABEL, SUBSCRIBE_LINK_LABEL,
};
