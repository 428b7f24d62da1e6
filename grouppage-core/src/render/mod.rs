//! Render tree and layout
//!
//! The widget and page builder produce a closed set of typed nodes
//! (`Container`, `Text`, `Link`) instead of untyped nested maps. The host
//! templating layer serializes the tree to markup.

pub mod element;
pub mod layout;
pub mod route;

pub use element::{RenderElement, TextTag};
pub use layout::{DefaultLayout, Layout};
pub use route::Route;
