//! Subscription widget shown on group pages
//!
//! Decides which of the subscription UI variants a viewer gets for a group
//! and renders it. Rendering is read-only: the emitted links point at the
//! subscribe/unsubscribe actions, they never invoke them.

use std::sync::Arc;

use tracing::debug;

use crate::config::WidgetConfig;
use crate::core_group::group::Group;
use crate::core_group::manager::{AccessError, AccessOracle, GroupOperation, MembershipStore};
use crate::core_group::membership::{Membership, MembershipError};
use crate::core_group::viewer::Viewer;
use crate::metrics;
use crate::render::{RenderElement, Route};

pub const SUBSCRIBE_LINK_LABEL: &str = "Subscribe to Group";
pub const LEAVE_LINK_LABEL: &str = "Leave Group";
pub const ALREADY_MEMBER_MESSAGE: &str = "You are already a member of this group.";

/// Personalised subscribe prompt
pub fn subscribe_message(viewer_name: &str, group_title: &str) -> String {
    format!(
        "Hi {}, click here if you would like to subscribe to this group called {}.",
        viewer_name, group_title
    )
}

/// UI variant chosen for a (group, viewer) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionVariant<'a> {
    /// Viewer may subscribe and holds no active membership
    SubscribePrompt { group: &'a Group, viewer: &'a Viewer },
    /// Viewer holds an active membership
    AlreadyMember {
        group: &'a Group,
        membership: Membership,
    },
}

impl SubscriptionVariant<'_> {
    fn outcome(&self) -> &'static str {
        match self {
            SubscriptionVariant::SubscribePrompt { .. } => "subscribe_prompt",
            SubscriptionVariant::AlreadyMember { .. } => "already_member",
        }
    }
}

/// Failures of the collaborators, passed through untouched
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Access check failed: {0}")]
    Access(#[from] AccessError),

    #[error("Membership lookup failed: {0}")]
    Membership(#[from] MembershipError),
}

pub struct GroupPageSubscriptionWidget {
    access: Arc<dyn AccessOracle>,
    memberships: Arc<dyn MembershipStore>,
    config: WidgetConfig,
}

impl GroupPageSubscriptionWidget {
    pub fn new(
        access: Arc<dyn AccessOracle>,
        memberships: Arc<dyn MembershipStore>,
        config: WidgetConfig,
    ) -> Self {
        Self {
            access,
            memberships,
            config,
        }
    }

    /// Decide the variant for `viewer` on `group`
    ///
    /// Checks run in order and the first failing one yields `None`:
    /// anonymous viewer, missing group marker, subscribe access denied.
    /// Otherwise an active membership gives `AlreadyMember` and anything
    /// else (none, pending, blocked) gives `SubscribePrompt`.
    pub fn decide<'a>(
        &self,
        group: &'a Group,
        viewer: &'a Viewer,
    ) -> Result<Option<SubscriptionVariant<'a>>, WidgetError> {
        let variant = self.evaluate(group, viewer)?;
        metrics::record_decision(
            variant
                .as_ref()
                .map(SubscriptionVariant::outcome)
                .unwrap_or("not_applicable"),
        );
        Ok(variant)
    }

    fn evaluate<'a>(
        &self,
        group: &'a Group,
        viewer: &'a Viewer,
    ) -> Result<Option<SubscriptionVariant<'a>>, WidgetError> {
        if viewer.is_anonymous() {
            debug!(group = %group.id, "Anonymous viewer, no subscription UI");
            return Ok(None);
        }

        if !group.is_group() {
            debug!(group = %group.id, "Content item is not a group");
            return Ok(None);
        }

        if !self
            .access
            .user_access(group, GroupOperation::Subscribe, viewer)?
        {
            debug!(group = %group.id, viewer = %viewer.id, "Subscribe access denied");
            return Ok(None);
        }

        let membership = self.memberships.get_membership(&group.id, &viewer.id)?;
        match membership {
            Some(membership) if membership.is_active() => {
                debug!(group = %group.id, viewer = %viewer.id, "Viewer is an active member");
                Ok(Some(SubscriptionVariant::AlreadyMember { group, membership }))
            }
            other => {
                debug!(
                    group = %group.id,
                    viewer = %viewer.id,
                    state = ?other.as_ref().map(Membership::state),
                    "Offering subscription"
                );
                Ok(Some(SubscriptionVariant::SubscribePrompt { group, viewer }))
            }
        }
    }

    /// Render a decided variant
    pub fn render(&self, variant: &SubscriptionVariant<'_>) -> RenderElement {
        match variant {
            SubscriptionVariant::SubscribePrompt { group, viewer } => {
                self.render_subscribe_prompt(group, viewer)
            }
            SubscriptionVariant::AlreadyMember { group, membership } => {
                self.render_membership_info(group, membership)
            }
        }
    }

    /// Decide and render in one step
    pub fn build(
        &self,
        group: &Group,
        viewer: &Viewer,
    ) -> Result<Option<RenderElement>, WidgetError> {
        Ok(self
            .decide(group, viewer)?
            .map(|variant| self.render(&variant)))
    }

    fn render_subscribe_prompt(&self, group: &Group, viewer: &Viewer) -> RenderElement {
        let route = Route::subscribe(
            group.entity_type_id.clone(),
            group.id.clone(),
            self.config.membership_type(),
        );

        RenderElement::Container {
            classes: self.config.subscribe_classes.clone(),
            children: vec![
                RenderElement::paragraph(subscribe_message(&viewer.display_name, &group.title)),
                RenderElement::link(SUBSCRIBE_LINK_LABEL, route),
            ],
        }
    }

    fn render_membership_info(&self, group: &Group, _membership: &Membership) -> RenderElement {
        let route = Route::unsubscribe(group.entity_type_id.clone(), group.id.clone());

        RenderElement::Container {
            classes: self.config.membership_info_classes.clone(),
            children: vec![
                RenderElement::paragraph(ALREADY_MEMBER_MESSAGE),
                RenderElement::link(LEAVE_LINK_LABEL, route),
            ],
        }
    }
}
