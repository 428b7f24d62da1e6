//! Collaborator doubles

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core_group::group::Group;
use crate::core_group::manager::{AccessError, AccessOracle, GroupOperation, MembershipStore};
use crate::core_group::membership::{Membership, MembershipError, MembershipType};
use crate::core_group::store::InMemoryMembershipStore;
use crate::core_group::types::{GroupId, ViewerId};
use crate::core_group::viewer::Viewer;

/// Oracle that always answers the same and counts its calls
#[derive(Debug, Default)]
pub struct StaticAccessOracle {
    allow: bool,
    calls: AtomicUsize,
}

impl StaticAccessOracle {
    pub fn allow() -> Self {
        Self {
            allow: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn deny() -> Self {
        Self {
            allow: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AccessOracle for StaticAccessOracle {
    fn user_access(
        &self,
        _group: &Group,
        _operation: GroupOperation,
        _viewer: &Viewer,
    ) -> Result<bool, AccessError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.allow)
    }
}

/// Oracle whose backing service is down
#[derive(Debug, Default)]
pub struct FailingAccessOracle;

impl AccessOracle for FailingAccessOracle {
    fn user_access(
        &self,
        _group: &Group,
        _operation: GroupOperation,
        _viewer: &Viewer,
    ) -> Result<bool, AccessError> {
        Err(AccessError::Unavailable("access service down".to_string()))
    }
}

/// Store whose backend is down
#[derive(Debug, Default)]
pub struct FailingMembershipStore;

impl FailingMembershipStore {
    fn unavailable() -> MembershipError {
        MembershipError::Unavailable("membership store down".to_string())
    }
}

impl MembershipStore for FailingMembershipStore {
    fn get_membership(
        &self,
        _group_id: &GroupId,
        _viewer_id: &ViewerId,
    ) -> Result<Option<Membership>, MembershipError> {
        Err(Self::unavailable())
    }

    fn create_membership(
        &self,
        _group: &Group,
        _viewer: &Viewer,
        _membership_type: &MembershipType,
    ) -> Result<Membership, MembershipError> {
        Err(Self::unavailable())
    }

    fn save(&self, _membership: &Membership) -> Result<(), MembershipError> {
        Err(Self::unavailable())
    }

    fn delete_membership(
        &self,
        _group_id: &GroupId,
        _viewer_id: &ViewerId,
    ) -> Result<(), MembershipError> {
        Err(Self::unavailable())
    }
}

/// In-memory store whose `save` always fails
#[derive(Debug, Default)]
pub struct SaveFailingMembershipStore {
    inner: InMemoryMembershipStore,
}

impl SaveFailingMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl MembershipStore for SaveFailingMembershipStore {
    fn get_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<Option<Membership>, MembershipError> {
        self.inner.get_membership(group_id, viewer_id)
    }

    fn create_membership(
        &self,
        group: &Group,
        viewer: &Viewer,
        membership_type: &MembershipType,
    ) -> Result<Membership, MembershipError> {
        self.inner.create_membership(group, viewer, membership_type)
    }

    fn save(&self, _membership: &Membership) -> Result<(), MembershipError> {
        Err(MembershipError::Unavailable("write rejected".to_string()))
    }

    fn delete_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<(), MembershipError> {
        self.inner.delete_membership(group_id, viewer_id)
    }
}

/// In-memory store that counts reads and writes
#[derive(Debug, Default)]
pub struct CountingMembershipStore {
    inner: InMemoryMembershipStore,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl CountingMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl MembershipStore for CountingMembershipStore {
    fn get_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<Option<Membership>, MembershipError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get_membership(group_id, viewer_id)
    }

    fn create_membership(
        &self,
        group: &Group,
        viewer: &Viewer,
        membership_type: &MembershipType,
    ) -> Result<Membership, MembershipError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.create_membership(group, viewer, membership_type)
    }

    fn save(&self, membership: &Membership) -> Result<(), MembershipError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.save(membership)
    }

    fn delete_membership(
        &self,
        group_id: &GroupId,
        viewer_id: &ViewerId,
    ) -> Result<(), MembershipError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_membership(group_id, viewer_id)
    }
}
