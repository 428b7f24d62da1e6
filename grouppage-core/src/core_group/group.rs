//! Group content item

use super::types::{EntityTypeId, GroupId, ViewerId};
use serde::{Deserialize, Serialize};

/// Marker carried by content items that act as groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMarker;

/// A content item that may act as a group container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier
    pub id: GroupId,

    /// Entity type the group lives on
    pub entity_type_id: EntityTypeId,

    /// Display title
    pub title: String,

    /// Account that created the group
    pub owner_id: Option<ViewerId>,

    /// Group marker; absent for plain content items
    pub marker: Option<GroupMarker>,

    /// Whether new subscriptions are accepted
    pub subscriptions_open: bool,
}

impl Group {
    /// Create a new group with the marker set
    pub fn new(id: GroupId, title: impl Into<String>) -> Self {
        Group {
            id,
            entity_type_id: EntityTypeId::default(),
            title: title.into(),
            owner_id: None,
            marker: Some(GroupMarker),
            subscriptions_open: true,
        }
    }

    /// Create a plain content item without the group marker
    pub fn plain(id: GroupId, title: impl Into<String>) -> Self {
        Group {
            marker: None,
            ..Group::new(id, title)
        }
    }

    pub fn with_owner(mut self, owner_id: ViewerId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_entity_type(mut self, entity_type_id: EntityTypeId) -> Self {
        self.entity_type_id = entity_type_id;
        self
    }

    pub fn with_subscriptions_open(mut self, open: bool) -> Self {
        self.subscriptions_open = open;
        self
    }

    /// Check whether this content item is actually a group
    pub fn is_group(&self) -> bool {
        self.marker.is_some()
    }

    pub fn is_owner(&self, viewer_id: &ViewerId) -> bool {
        self.owner_id.as_ref() == Some(viewer_id)
    }
}
