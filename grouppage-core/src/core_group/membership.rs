//! Membership records linking a viewer to a group

use super::types::{GroupId, Timestamp, ViewerId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State of a membership record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipState {
    /// Full member
    Active,
    /// Awaiting approval
    Pending,
    /// Banned from the group
    Blocked,
}

impl MembershipState {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipState::Active => "active",
            MembershipState::Pending => "pending",
            MembershipState::Blocked => "blocked",
        }
    }
}

impl fmt::Display for MembershipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MembershipState {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(MembershipState::Active),
            "pending" => Ok(MembershipState::Pending),
            "blocked" => Ok(MembershipState::Blocked),
            other => Err(MembershipError::InvalidState(other.to_string())),
        }
    }
}

/// Membership type token (bundle of the membership record)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MembershipType(pub String);

impl MembershipType {
    pub const DEFAULT: &'static str = "default";

    pub fn new(token: impl Into<String>) -> Self {
        MembershipType(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MembershipType {
    fn default() -> Self {
        MembershipType(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A (group, viewer) relationship record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub group_id: GroupId,
    pub viewer_id: ViewerId,
    pub membership_type: MembershipType,
    state: MembershipState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Membership {
    /// New memberships start out pending
    pub fn new(group_id: GroupId, viewer_id: ViewerId, membership_type: MembershipType) -> Self {
        let now = Timestamp::now();
        Membership {
            group_id,
            viewer_id,
            membership_type,
            state: MembershipState::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn state(&self) -> MembershipState {
        self.state
    }

    /// Change the state in memory; persist with `MembershipStore::save`
    pub fn set_state(&mut self, state: MembershipState) {
        if self.state != state {
            self.state = state;
            self.updated_at = Timestamp::now();
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == MembershipState::Active
    }
}

/// Membership store errors
#[derive(Debug, thiserror::Error)]
pub enum MembershipError {
    #[error("Membership already exists for viewer {viewer_id} in group {group_id}")]
    AlreadyExists { group_id: GroupId, viewer_id: ViewerId },

    #[error("Membership not found for viewer {viewer_id} in group {group_id}")]
    NotFound { group_id: GroupId, viewer_id: ViewerId },

    #[error("Invalid membership state: {0}")]
    InvalidState(String),

    #[error("Membership store unavailable: {0}")]
    Unavailable(String),
}
