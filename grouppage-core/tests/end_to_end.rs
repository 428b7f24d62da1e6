/*
    end_to_end.rs - Group page scenarios

    Composes the in-memory membership store, the reference access policy,
    the widget and the page builder the way a host would, then checks the
    rendered page the way a visitor would see it.
*/

use std::collections::HashMap;
use std::sync::Arc;

use grouppage_core::config::WidgetConfig;
use grouppage_core::core_group::{
    ActionOutcome, Group, GroupAccessPolicy, GroupId, InMemoryMembershipStore, SubscriptionActions,
    Viewer, ViewerId,
};
use grouppage_core::render::DefaultLayout;
use grouppage_core::test_utils::*;
use grouppage_core::widget::{
    GroupPageBuilder, GroupPageSubscriptionWidget, ALREADY_MEMBER_MESSAGE, LEAVE_LINK_LABEL,
    SUBSCRIBE_LINK_LABEL,
};

struct Site {
    store: Arc<InMemoryMembershipStore>,
    page: GroupPageBuilder,
    actions: SubscriptionActions,
    group: Group,
}

fn site() -> Site {
    let store = Arc::new(InMemoryMembershipStore::new());
    let policy = Arc::new(GroupAccessPolicy::new(store.clone()));

    let widget = GroupPageSubscriptionWidget::new(
        policy.clone(),
        store.clone(),
        WidgetConfig::default(),
    );
    let page = GroupPageBuilder::new(widget, Arc::new(DefaultLayout));
    let actions = SubscriptionActions::new(policy, store.clone());

    let group = TestGroupBuilder::new()
        .with_title("Test Group")
        .with_owner(ViewerId::new("creator"))
        .build();

    Site {
        store,
        page,
        actions,
        group,
    }
}

/// Scenario A: authenticated non-member sees the personalised prompt
#[test]
fn test_subscription_prompt_for_authenticated_viewer() {
    let site = site();
    let viewer = alice();

    let page = site.page.build_full(&site.group, &viewer).unwrap();

    assert_text_contains(&page, "Hi Alice");
    assert_text_contains(&page, "Test Group");
    assert!(page
        .text_content()
        .contains(&"Hi Alice, click here if you would like to subscribe to this group called Test Group."));
    assert_link_exists(&page, SUBSCRIBE_LINK_LABEL);
    assert_link_not_exists(&page, LEAVE_LINK_LABEL);
}

/// Scenario B: anonymous viewer gets no subscription container
#[test]
fn test_no_subscription_ui_for_anonymous_viewer() {
    let site = site();

    let page = site.page.build_full(&site.group, &Viewer::anonymous()).unwrap();

    assert_link_not_exists(&page, SUBSCRIBE_LINK_LABEL);
    assert_text_not_contains(&page, "Subscribe to Group");
    assert!(page.find_container("group-subscription-ui").is_none());
    assert_text_contains(&page, "Test Group");
}

/// Scenario C: active member sees the membership notice
#[test]
fn test_membership_info_for_existing_member() {
    let site = site();
    let viewer = alice();
    subscribe_viewer_to_group(site.store.as_ref(), &site.group, &viewer);

    let page = site.page.build_full(&site.group, &viewer).unwrap();

    assert!(page.text_content().contains(&ALREADY_MEMBER_MESSAGE));
    assert_link_exists(&page, LEAVE_LINK_LABEL);
    assert_link_not_exists(&page, SUBSCRIBE_LINK_LABEL);
    assert_text_not_contains(&page, "Hi Alice");
}

#[test]
fn test_group_creator_sees_no_prompt() {
    let site = site();
    let creator = Viewer::authenticated(ViewerId::new("creator"), "Creator");

    let page = site.page.build_full(&site.group, &creator).unwrap();

    assert_link_not_exists(&page, SUBSCRIBE_LINK_LABEL);
    assert_link_not_exists(&page, LEAVE_LINK_LABEL);
}

#[test]
fn test_plain_content_page_has_no_subscription_ui() {
    let site = site();
    let page_item = TestGroupBuilder::new().with_title("About").not_a_group().build();

    let page = site.page.build_full(&page_item, &alice()).unwrap();

    assert_eq!(page.text_content(), vec!["About"]);
}

/// Following the emitted links flips the page between both variants
#[test]
fn test_follow_subscribe_and_leave_links() {
    let site = site();
    let viewer = test_viewer("Bob");
    let groups: HashMap<GroupId, Group> = [(site.group.id.clone(), site.group.clone())]
        .into_iter()
        .collect();

    let page = site.page.build_full(&site.group, &viewer).unwrap();
    let subscribe = assert_some(page.find_link(SUBSCRIBE_LINK_LABEL)).clone();
    let outcome = site.actions.handle(&subscribe, &viewer, &groups).unwrap();
    assert!(matches!(outcome, ActionOutcome::Subscribed(_)));

    let page = site.page.build_full(&site.group, &viewer).unwrap();
    assert_link_exists(&page, LEAVE_LINK_LABEL);
    let leave = assert_some(page.find_link(LEAVE_LINK_LABEL)).clone();
    let outcome = site.actions.handle(&leave, &viewer, &groups).unwrap();
    assert_eq!(outcome, ActionOutcome::Unsubscribed);

    let page = site.page.build_full(&site.group, &viewer).unwrap();
    assert_link_exists(&page, SUBSCRIBE_LINK_LABEL);
    assert!(site.store.is_empty());
}

#[test]
fn test_rendered_page_serializes_to_json() {
    let site = site();
    let page = site.page.build_full(&site.group, &alice()).unwrap();

    let json = serde_json::to_string(&page).unwrap();
    assert!(json.contains("\"route\":\"subscribe\""));
    assert!(json.contains("Subscribe to Group"));

    let back: grouppage_core::RenderElement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, page);
}
