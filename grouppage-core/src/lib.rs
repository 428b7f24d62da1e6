//! Group page rendering with a subscription widget
//!
//! Given a group and the viewer of its page, the widget decides whether to
//! show a subscribe prompt, a "you are a member" notice, or nothing, and
//! renders the choice as a typed tree for the host templating layer.

pub mod config;
pub mod core_group;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod test_utils;
pub mod widget;

pub use config::Config;
pub use core_group::{
    AccessOracle, Group, GroupId, Membership, MembershipState, MembershipStore, Viewer, ViewerId,
};
pub use logging::{init_logging, LogLevel};
pub use render::{RenderElement, Route};
pub use widget::{GroupPageBuilder, GroupPageSubscriptionWidget, SubscriptionVariant};
