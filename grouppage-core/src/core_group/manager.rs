//! Collaborator traits for access checks and membership persistence

use super::group::Group;
use super::membership::{Membership, MembershipError, MembershipType};
use super::types::{GroupId, ViewerId};
use super::viewer::Viewer;
use std::fmt;

/// Operations a viewer may request on a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupOperation {
    Subscribe,
    Unsubscribe,
}

impl GroupOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupOperation::Subscribe => "subscribe",
            GroupOperation::Unsubscribe => "unsubscribe",
        }
    }
}

impl fmt::Display for GroupOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Permission check for group operations
pub trait AccessOracle: Send + Sync {
    /// Whether `viewer` may perform `operation` on `group`
    fn user_access(
        &self,
        group: &Group,
        operation: GroupOperation,
        viewer: &Viewer,
    ) -> Result<bool, AccessError>;
}

/// Persistence for membership records
///
/// Implementations enforce at most one membership per (group, viewer).
pub trait MembershipStore: Send + Sync {
    /// Look up the membership of a viewer in a group
    fn get_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<Option<Membership>, MembershipError>;

    /// Create and persist a new pending membership
    fn create_membership(
        &self,
        group: &Group,
        viewer: &Viewer,
        membership_type: &MembershipType,
    ) -> Result<Membership, MembershipError>;

    /// Persist changes made to an existing membership
    fn save(&self, membership: &Membership) -> Result<(), MembershipError>;

    /// Remove a membership
    fn delete_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<(), MembershipError>;
}

/// Access oracle errors
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("Access service unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}
