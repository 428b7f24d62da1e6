//! Test fixtures for groups, viewers and memberships
//!
//! Provides builder patterns and factory functions for creating test data.

use crate::core_group::group::Group;
use crate::core_group::manager::MembershipStore;
use crate::core_group::membership::{Membership, MembershipState, MembershipType};
use crate::core_group::types::{EntityTypeId, GroupId, ViewerId};
use crate::core_group::viewer::Viewer;

/// Builder for creating test groups
pub struct TestGroupBuilder {
    id: GroupId,
    title: String,
    entity_type_id: EntityTypeId,
    owner: Option<ViewerId>,
    is_group: bool,
    subscriptions_open: bool,
}

impl TestGroupBuilder {
    pub fn new() -> Self {
        Self {
            id: GroupId::generate(),
            title: "Test Group".to_string(),
            entity_type_id: EntityTypeId::default(),
            owner: None,
            is_group: true,
            subscriptions_open: true,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = GroupId::new(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_entity_type(mut self, entity_type_id: impl Into<String>) -> Self {
        self.entity_type_id = EntityTypeId::new(entity_type_id);
        self
    }

    pub fn with_owner(mut self, owner: ViewerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Build a plain content item without the group marker
    pub fn not_a_group(mut self) -> Self {
        self.is_group = false;
        self
    }

    pub fn closed(mut self) -> Self {
        self.subscriptions_open = false;
        self
    }

    pub fn build(self) -> Group {
        let group = if self.is_group {
            Group::new(self.id, self.title)
        } else {
            Group::plain(self.id, self.title)
        };
        let group = group
            .with_entity_type(self.entity_type_id)
            .with_subscriptions_open(self.subscriptions_open);

        match self.owner {
            Some(owner) => group.with_owner(owner),
            None => group,
        }
    }
}

impl Default for TestGroupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating test viewers
pub struct TestViewerBuilder {
    id: ViewerId,
    name: String,
    anonymous: bool,
}

impl TestViewerBuilder {
    pub fn new() -> Self {
        Self {
            id: ViewerId::generate(),
            name: "Alice".to_string(),
            anonymous: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ViewerId::new(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    pub fn build(self) -> Viewer {
        if self.anonymous {
            Viewer::anonymous()
        } else {
            Viewer::authenticated(self.id, self.name)
        }
    }
}

impl Default for TestViewerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Quick fixture functions for common test objects

pub fn test_group() -> Group {
    TestGroupBuilder::new().build()
}

pub fn alice() -> Viewer {
    TestViewerBuilder::new().with_name("Alice").build()
}

pub fn test_viewer(name: &str) -> Viewer {
    TestViewerBuilder::new().with_name(name).build()
}

/// Give `viewer` an active membership of `group`, bypassing access checks
pub fn subscribe_viewer_to_group(
    store: &dyn MembershipStore,
    group: &Group,
    viewer: &Viewer,
) -> Membership {
    add_membership_with_state(store, group, viewer, MembershipState::Active)
}

/// Store a membership of `viewer` in `group` with the given state
pub fn add_membership_with_state(
    store: &dyn MembershipStore,
    group: &Group,
    viewer: &Viewer,
    state: MembershipState,
) -> Membership {
    let mut membership = store
        .create_membership(group, viewer, &MembershipType::default())
        .expect("create membership");
    membership.set_state(state);
    store.save(&membership).expect("save membership");
    membership
}
