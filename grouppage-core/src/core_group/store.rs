//! In-memory membership store and the reference access policy

use super::group::Group;
use super::manager::{AccessError, AccessOracle, GroupOperation, MembershipStore};
use super::membership::{Membership, MembershipError, MembershipState, MembershipType};
use super::types::{GroupId, ViewerId};
use super::viewer::Viewer;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

type MembershipKey = (GroupId, ViewerId);

/// Membership store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryMembershipStore {
    memberships: RwLock<HashMap<MembershipKey, Membership>>,
}

impl InMemoryMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored memberships
    pub fn len(&self) -> usize {
        self.memberships.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> MembershipError {
        MembershipError::Unavailable("membership lock poisoned".to_string())
    }
}

impl MembershipStore for InMemoryMembershipStore {
    fn get_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<Option<Membership>, MembershipError> {
        let memberships = self.memberships.read().map_err(|_| Self::poisoned())?;
        Ok(memberships
            .get(&(group_id.clone(), viewer_id.clone()))
            .cloned())
    }

    fn create_membership(
        &self,
        group: &Group,
        viewer: &Viewer,
        membership_type: &MembershipType,
    ) -> Result<Membership, MembershipError> {
        let mut memberships = self.memberships.write().map_err(|_| Self::poisoned())?;
        let key = (group.id.clone(), viewer.id.clone());

        if memberships.contains_key(&key) {
            return Err(MembershipError::AlreadyExists {
                group_id: group.id.clone(),
                viewer_id: viewer.id.clone(),
            });
        }

        let membership = Membership::new(
            group.id.clone(),
            viewer.id.clone(),
            membership_type.clone(),
        );
        memberships.insert(key, membership.clone());
        debug!(group = %group.id, viewer = %viewer.id, "Created membership");

        Ok(membership)
    }

    fn save(&self, membership: &Membership) -> Result<(), MembershipError> {
        let mut memberships = self.memberships.write().map_err(|_| Self::poisoned())?;
        memberships.insert(
            (membership.group_id.clone(), membership.viewer_id.clone()),
            membership.clone(),
        );
        debug!(
            group = %membership.group_id,
            viewer = %membership.viewer_id,
            state = %membership.state(),
            "Saved membership"
        );
        Ok(())
    }

    fn delete_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<(), MembershipError> {
        let mut memberships = self.memberships.write().map_err(|_| Self::poisoned())?;
        memberships
            .remove(&(group_id.clone(), viewer_id.clone()))
            .map(|_| ())
            .ok_or_else(|| MembershipError::NotFound {
                group_id: group_id.clone(),
                viewer_id: viewer_id.clone(),
            })
    }
}

/// Reference access policy
///
/// `Subscribe` is granted to authenticated non-owners of open groups.
/// `Unsubscribe` is granted to authenticated viewers holding a membership.
pub struct GroupAccessPolicy {
    store: Arc<dyn MembershipStore>,
}

impl GroupAccessPolicy {
    pub fn new(store: Arc<dyn MembershipStore>) -> Self {
        Self { store }
    }
}

impl AccessOracle for GroupAccessPolicy {
    fn user_access(
        &self,
        group: &Group,
        operation: GroupOperation,
        viewer: &Viewer,
    ) -> Result<bool, AccessError> {
        if viewer.is_anonymous() || !group.is_group() {
            return Ok(false);
        }

        match operation {
            GroupOperation::Subscribe => {
                Ok(group.subscriptions_open && !group.is_owner(&viewer.id))
            }
            GroupOperation::Unsubscribe => {
                let membership = self
                    .store
                    .get_membership(&group.id, &viewer.id)
                    .map_err(|e| AccessError::Unavailable(e.to_string()))?;
                Ok(membership.is_some_and(|m| m.state() != MembershipState::Blocked))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Group, Viewer, Arc<InMemoryMembershipStore>) {
        let group = Group::new(GroupId::new("1"), "Test Group").with_owner(ViewerId::new("99"));
        let viewer = Viewer::authenticated(ViewerId::new("2"), "Alice");
        (group, viewer, Arc::new(InMemoryMembershipStore::new()))
    }

    #[test]
    fn test_create_and_get_membership() {
        let (group, viewer, store) = setup();
        assert!(store.get_membership(&group.id, &viewer.id).unwrap().is_none());

        let created = store
            .create_membership(&group, &viewer, &MembershipType::default())
            .unwrap();
        let fetched = store.get_membership(&group.id, &viewer.id).unwrap().unwrap();
        assert_eq!(created, fetched);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cannot_create_duplicate_membership() {
        let (group, viewer, store) = setup();
        store
            .create_membership(&group, &viewer, &MembershipType::default())
            .unwrap();

        let result = store.create_membership(&group, &viewer, &MembershipType::default());
        assert!(matches!(result, Err(MembershipError::AlreadyExists { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_persists_state() {
        let (group, viewer, store) = setup();
        let mut membership = store
            .create_membership(&group, &viewer, &MembershipType::default())
            .unwrap();
        membership.set_state(MembershipState::Active);

        // Not visible until saved
        let stored = store.get_membership(&group.id, &viewer.id).unwrap().unwrap();
        assert_eq!(stored.state(), MembershipState::Pending);

        store.save(&membership).unwrap();
        let stored = store.get_membership(&group.id, &viewer.id).unwrap().unwrap();
        assert_eq!(stored.state(), MembershipState::Active);
    }

    #[test]
    fn test_delete_membership() {
        let (group, viewer, store) = setup();
        store
            .create_membership(&group, &viewer, &MembershipType::default())
            .unwrap();
        store.delete_membership(&group.id, &viewer.id).unwrap();
        assert!(store.is_empty());

        let result = store.delete_membership(&group.id, &viewer.id);
        assert!(matches!(result, Err(MembershipError::NotFound { .. })));
    }

    #[test]
    fn test_policy_subscribe() {
        let (group, viewer, store) = setup();
        let policy = GroupAccessPolicy::new(store);

        assert!(policy
            .user_access(&group, GroupOperation::Subscribe, &viewer)
            .unwrap());
        assert!(!policy
            .user_access(&group, GroupOperation::Subscribe, &Viewer::anonymous())
            .unwrap());

        let owner = Viewer::authenticated(ViewerId::new("99"), "Owner");
        assert!(!policy
            .user_access(&group, GroupOperation::Subscribe, &owner)
            .unwrap());

        let closed = group.clone().with_subscriptions_open(false);
        assert!(!policy
            .user_access(&closed, GroupOperation::Subscribe, &viewer)
            .unwrap());

        let plain = Group::plain(GroupId::new("3"), "Page");
        assert!(!policy
            .user_access(&plain, GroupOperation::Subscribe, &viewer)
            .unwrap());
    }

    #[test]
    fn test_policy_unsubscribe_requires_membership() {
        let (group, viewer, store) = setup();
        let policy = GroupAccessPolicy::new(store.clone());
        assert!(!policy
            .user_access(&group, GroupOperation::Unsubscribe, &viewer)
            .unwrap());

        store
            .create_membership(&group, &viewer, &MembershipType::default())
            .unwrap();
        assert!(policy
            .user_access(&group, GroupOperation::Unsubscribe, &viewer)
            .unwrap());
    }

    #[test]
    fn test_policy_denies_blocked_unsubscribe() {
        let (group, viewer, store) = setup();
        let policy = GroupAccessPolicy::new(store.clone());

        let mut membership = store
            .create_membership(&group, &viewer, &MembershipType::default())
            .unwrap();
        membership.set_state(MembershipState::Blocked);
        store.save(&membership).unwrap();

        assert!(!policy
            .user_access(&group, GroupOperation::Unsubscribe, &viewer)
            .unwrap());
    }
}
