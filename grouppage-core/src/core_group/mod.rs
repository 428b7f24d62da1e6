//! Groups, viewers and memberships
//!
//! ## Architecture
//!
//! - **Group**: content item that may carry the group marker
//! - **Viewer**: requester, authenticated or anonymous
//! - **Membership**: (group, viewer) record with a state
//! - **AccessOracle** / **MembershipStore**: collaborator traits, injected
//!   into the widget and the actions at composition time
//!
//! `store` holds in-memory reference implementations of both traits and
//! `actions` the handlers behind the subscribe/unsubscribe links.

pub mod actions;
pub mod group;
pub mod manager;
pub mod membership;
pub mod store;
pub mod types;
pub mod viewer;

pub use actions::{ActionError, ActionOutcome, GroupDirectory, SubscriptionActions};
pub use group::{Group, GroupMarker};
pub use manager::{AccessError, AccessOracle, GroupOperation, MembershipStore};
pub use membership::{Membership, MembershipError, MembershipState, MembershipType};
pub use store::{GroupAccessPolicy, InMemoryMembershipStore};
pub use types::{EntityTypeId, GroupId, Timestamp, ViewerId};
pub use viewer::Viewer;
