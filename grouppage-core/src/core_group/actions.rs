//! Handlers behind the subscribe/unsubscribe links

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use super::group::Group;
use super::manager::{AccessError, AccessOracle, GroupOperation, MembershipStore};
use super::membership::{Membership, MembershipError, MembershipState, MembershipType};
use super::types::{EntityTypeId, GroupId};
use super::viewer::Viewer;
use crate::metrics;
use crate::render::Route;

/// Resolves groups referenced by routes
pub trait GroupDirectory {
    fn get_group(&self, group_id: &GroupId) -> Option<Group>;
}

impl GroupDirectory for HashMap<GroupId, Group> {
    fn get_group(&self, group_id: &GroupId) -> Option<Group> {
        self.get(group_id).cloned()
    }
}

/// Result of a handled route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Subscribed(Membership),
    Unsubscribed,
}

/// Subscription action errors
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Permission denied: cannot {0} this group")]
    AccessDenied(GroupOperation),

    #[error("Viewer is already a member")]
    AlreadyMember,

    #[error("Viewer is blocked from this group")]
    Blocked,

    #[error("Viewer is not a member")]
    NotMember,

    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),

    #[error("Route targets entity type {found}, group is {expected}")]
    EntityTypeMismatch {
        expected: EntityTypeId,
        found: EntityTypeId,
    },

    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    #[error("Membership error: {0}")]
    Membership(#[from] MembershipError),
}

/// State-changing subscription operations
pub struct SubscriptionActions {
    access: Arc<dyn AccessOracle>,
    memberships: Arc<dyn MembershipStore>,
}

impl SubscriptionActions {
    pub fn new(access: Arc<dyn AccessOracle>, memberships: Arc<dyn MembershipStore>) -> Self {
        Self {
            access,
            memberships,
        }
    }

    /// Subscribe `viewer` to `group`, leaving an active membership
    ///
    /// A pending membership is activated; a blocked one is refused.
    /// `create_membership` persists a pending record, so when the following
    /// `save` fails that record is deleted again before the error returns.
    pub fn subscribe(
        &self,
        group: &Group,
        viewer: &Viewer,
        membership_type: &MembershipType,
    ) -> Result<Membership, ActionError> {
        let result = self.try_subscribe(group, viewer, membership_type);
        Self::record("subscribe", &result);
        result
    }

    fn try_subscribe(
        &self,
        group: &Group,
        viewer: &Viewer,
        membership_type: &MembershipType,
    ) -> Result<Membership, ActionError> {
        self.check_access(group, GroupOperation::Subscribe, viewer)?;

        let (mut membership, created) =
            match self.memberships.get_membership(&group.id, &viewer.id)? {
                Some(existing) => match existing.state() {
                    MembershipState::Active => return Err(ActionError::AlreadyMember),
                    MembershipState::Blocked => {
                        warn!(group = %group.id, viewer = %viewer.id, "Blocked viewer tried to subscribe");
                        return Err(ActionError::Blocked);
                    }
                    MembershipState::Pending => (existing, false),
                },
                None => (
                    self.memberships
                        .create_membership(group, viewer, membership_type)?,
                    true,
                ),
            };

        membership.set_state(MembershipState::Active);
        if let Err(e) = self.memberships.save(&membership) {
            if created {
                if let Err(cleanup) = self.memberships.delete_membership(&group.id, &viewer.id) {
                    warn!(group = %group.id, viewer = %viewer.id, error = %cleanup, "Failed to remove pending membership");
                }
            }
            return Err(e.into());
        }
        info!(group = %group.id, viewer = %viewer.id, "Viewer subscribed");

        Ok(membership)
    }

    /// Remove `viewer`'s membership of `group`
    ///
    /// A blocked membership is kept: deleting it would lift the block.
    pub fn unsubscribe(&self, group: &Group, viewer: &Viewer) -> Result<(), ActionError> {
        let result = self.try_unsubscribe(group, viewer);
        Self::record("unsubscribe", &result);
        result
    }

    fn try_unsubscribe(&self, group: &Group, viewer: &Viewer) -> Result<(), ActionError> {
        match self.memberships.get_membership(&group.id, &viewer.id)? {
            None => return Err(ActionError::NotMember),
            Some(existing) if existing.state() == MembershipState::Blocked => {
                warn!(group = %group.id, viewer = %viewer.id, "Blocked viewer tried to unsubscribe");
                return Err(ActionError::Blocked);
            }
            Some(_) => {}
        }
        self.check_access(group, GroupOperation::Unsubscribe, viewer)?;

        self.memberships.delete_membership(&group.id, &viewer.id)?;
        info!(group = %group.id, viewer = %viewer.id, "Viewer unsubscribed");
        Ok(())
    }

    /// Dispatch a route emitted by the widget
    pub fn handle(
        &self,
        route: &Route,
        viewer: &Viewer,
        groups: &dyn GroupDirectory,
    ) -> Result<ActionOutcome, ActionError> {
        let group = groups
            .get_group(route.group_id())
            .ok_or_else(|| ActionError::GroupNotFound(route.group_id().clone()))?;
        if route.entity_type_id() != &group.entity_type_id {
            return Err(ActionError::EntityTypeMismatch {
                expected: group.entity_type_id,
                found: route.entity_type_id().clone(),
            });
        }

        match route {
            Route::Subscribe {
                membership_type, ..
            } => self
                .subscribe(&group, viewer, membership_type)
                .map(ActionOutcome::Subscribed),
            Route::Unsubscribe { .. } => self
                .unsubscribe(&group, viewer)
                .map(|_| ActionOutcome::Unsubscribed),
        }
    }

    fn check_access(
        &self,
        group: &Group,
        operation: GroupOperation,
        viewer: &Viewer,
    ) -> Result<(), ActionError> {
        if !self.access.user_access(group, operation, viewer)? {
            warn!(group = %group.id, viewer = %viewer.id, %operation, "Action denied");
            return Err(ActionError::AccessDenied(operation));
        }
        Ok(())
    }

    fn record<T>(action: &'static str, result: &Result<T, ActionError>) {
        metrics::record_action(action, if result.is_ok() { "ok" } else { "rejected" });
    }
}
