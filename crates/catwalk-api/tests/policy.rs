//! Access policy selection and evaluation matrix.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use catwalk_api::context::{Caller, RequestContext};
use catwalk_api::policy::{AccessDecision, AccessPolicy};
use catwalk_core::model::{ActionKind, Cat};

fn cat_owned_by(owner: &str) -> Cat {
    Cat {
        id: 1,
        name: "Tommy".into(),
        color: "black".into(),
        birth_year: 2020,
        owner: owner.into(),
        achievements: vec![],
    }
}

fn ctx(caller: Caller, action: ActionKind) -> RequestContext {
    RequestContext::new(caller, action)
}

#[test]
fn retrieve_selects_read_only_everything_else_owner_or_read_only() {
    assert_eq!(
        AccessPolicy::for_action(ActionKind::Retrieve),
        AccessPolicy::ReadOnly
    );
    for action in [
        ActionKind::Create,
        ActionKind::List,
        ActionKind::Update,
        ActionKind::PartialUpdate,
        ActionKind::Delete,
    ] {
        assert_eq!(
            AccessPolicy::for_action(action),
            AccessPolicy::OwnerOrReadOnly,
            "{action:?}"
        );
    }
}

#[test]
fn owner_or_read_only_allows_reads_for_anyone() {
    let cat = cat_owned_by("alice");
    for caller in [
        Caller::User("alice".into()),
        Caller::User("bob".into()),
        Caller::Anonymous("10.0.0.1".into()),
    ] {
        let c = ctx(caller, ActionKind::List);
        assert_eq!(
            AccessPolicy::OwnerOrReadOnly.authorize(&c, Some(&cat)),
            AccessDecision::Allow
        );
    }
}

#[test]
fn owner_or_read_only_gates_writes_on_ownership() {
    let cat = cat_owned_by("alice");
    for action in [
        ActionKind::Update,
        ActionKind::PartialUpdate,
        ActionKind::Delete,
    ] {
        let owner = ctx(Caller::User("alice".into()), action);
        let stranger = ctx(Caller::User("bob".into()), action);
        let anon = ctx(Caller::Anonymous("10.0.0.1".into()), action);

        assert_eq!(
            AccessPolicy::OwnerOrReadOnly.authorize(&owner, Some(&cat)),
            AccessDecision::Allow,
            "{action:?} by owner"
        );
        assert_eq!(
            AccessPolicy::OwnerOrReadOnly.authorize(&stranger, Some(&cat)),
            AccessDecision::Deny,
            "{action:?} by non-owner"
        );
        assert_eq!(
            AccessPolicy::OwnerOrReadOnly.authorize(&anon, Some(&cat)),
            AccessDecision::Deny,
            "{action:?} by anonymous"
        );
    }
}

#[test]
fn creation_is_allowed_for_any_caller() {
    for caller in [
        Caller::User("alice".into()),
        Caller::Anonymous("10.0.0.1".into()),
    ] {
        let c = ctx(caller, ActionKind::Create);
        assert_eq!(
            AccessPolicy::OwnerOrReadOnly.authorize(&c, None),
            AccessDecision::Allow
        );
    }
}

#[test]
fn read_only_denies_writes_even_for_the_owner() {
    let cat = cat_owned_by("alice");

    let read = ctx(Caller::User("bob".into()), ActionKind::Retrieve);
    assert_eq!(
        AccessPolicy::ReadOnly.authorize(&read, Some(&cat)),
        AccessDecision::Allow
    );

    for action in [
        ActionKind::Update,
        ActionKind::PartialUpdate,
        ActionKind::Delete,
    ] {
        let owner = ctx(Caller::User("alice".into()), action);
        assert_eq!(
            AccessPolicy::ReadOnly.authorize(&owner, Some(&cat)),
            AccessDecision::Deny,
            "{action:?} must be denied even for the owner"
        );
    }
}
