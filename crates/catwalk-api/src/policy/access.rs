//! Per-action, per-instance authorization predicate.

use catwalk_core::model::{ActionKind, Cat};

use crate::context::RequestContext;

/// Decision from policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

/// The two policy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Reads always allowed; creation always allowed (ownership is assigned
    /// afterward, there is no instance to check yet); writes only by the
    /// instance owner.
    OwnerOrReadOnly,
    /// Reads always allowed; writes denied for everyone, owner included.
    ReadOnly,
}

impl AccessPolicy {
    /// Select the policy for an action kind. Pure function of the kind: the
    /// single-instance retrieval action swaps in the stricter read-only
    /// variant, everything else keeps the default.
    ///
    /// The match is exhaustive: an unhandled new action kind must fail to
    /// compile rather than silently inherit a default.
    pub fn for_action(action: ActionKind) -> AccessPolicy {
        match action {
            ActionKind::Retrieve => AccessPolicy::ReadOnly,
            ActionKind::Create
            | ActionKind::List
            | ActionKind::Update
            | ActionKind::PartialUpdate
            | ActionKind::Delete => AccessPolicy::OwnerOrReadOnly,
        }
    }

    /// Decide whether the caller may perform the context's action on the
    /// target instance (`None` for create/list, which have no target).
    pub fn authorize(self, ctx: &RequestContext, instance: Option<&Cat>) -> AccessDecision {
        match self {
            AccessPolicy::ReadOnly => {
                if ctx.action.is_safe() {
                    AccessDecision::Allow
                } else {
                    AccessDecision::Deny
                }
            }
            AccessPolicy::OwnerOrReadOnly => match ctx.action {
                ActionKind::Create | ActionKind::List | ActionKind::Retrieve => {
                    AccessDecision::Allow
                }
                ActionKind::Update | ActionKind::PartialUpdate | ActionKind::Delete => {
                    match instance {
                        Some(cat) if ctx.caller.owns(&cat.owner) => AccessDecision::Allow,
                        _ => AccessDecision::Deny,
                    }
                }
            },
        }
    }
}
