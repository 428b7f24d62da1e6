//! Route descriptors for the subscribe/unsubscribe actions

use crate::core_group::membership::MembershipType;
use crate::core_group::types::{EntityTypeId, GroupId};
use serde::{Deserialize, Serialize};

/// Opaque action target emitted by the widget
///
/// The host router turns these into URLs; the viewer is implied by the
/// session of whoever follows the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Subscribe {
        entity_type_id: EntityTypeId,
        group_id: GroupId,
        membership_type: MembershipType,
    },
    Unsubscribe {
        entity_type_id: EntityTypeId,
        group_id: GroupId,
    },
}

impl Route {
    pub fn subscribe(
        entity_type_id: EntityTypeId,
        group_id: GroupId,
        membership_type: MembershipType,
    ) -> Self {
        Route::Subscribe {
            entity_type_id,
            group_id,
            membership_type,
        }
    }

    pub fn unsubscribe(entity_type_id: EntityTypeId, group_id: GroupId) -> Self {
        Route::Unsubscribe {
            entity_type_id,
            group_id,
        }
    }

    /// Host route name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Subscribe { .. } => "og.subscribe",
            Route::Unsubscribe { .. } => "og.unsubscribe",
        }
    }

    /// Route parameters in declaration order
    pub fn parameters(&self) -> Vec<(&'static str, String)> {
        match self {
            Route::Subscribe {
                entity_type_id,
                group_id,
                membership_type,
            } => vec![
                ("entity_type_id", entity_type_id.to_string()),
                ("group", group_id.to_string()),
                ("og_membership_type", membership_type.to_string()),
            ],
            Route::Unsubscribe {
                entity_type_id,
                group_id,
            } => vec![
                ("entity_type_id", entity_type_id.to_string()),
                ("group", group_id.to_string()),
            ],
        }
    }

    pub fn group_id(&self) -> &GroupId {
        match self {
            Route::Subscribe { group_id, .. } | Route::Unsubscribe { group_id, .. } => group_id,
        }
    }

    pub fn entity_type_id(&self) -> &EntityTypeId {
        match self {
            Route::Subscribe { entity_type_id, .. } | Route::Unsubscribe { entity_type_id, .. } => {
                entity_type_id
            }
        }
    }
}
