//! Per-request caller/action context.
//!
//! A `RequestContext` is resolved once at the transport edge and handed down
//! through throttle, policy, and dispatch. It lives for exactly one request.

use std::fmt;

use catwalk_core::model::ActionKind;

/// The authenticated caller identity, or the anonymous identity bucketed by
/// calling origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    User(String),
    Anonymous(String),
}

impl Caller {
    /// Key used for per-identity throttle bucketing. Users and anonymous
    /// origins live in separate namespaces so they can never collide.
    pub fn bucket_key(&self) -> String {
        match self {
            Caller::User(name) => format!("user:{name}"),
            Caller::Anonymous(origin) => format!("anon:{origin}"),
        }
    }

    /// Identity label recorded as `owner` at creation and compared by the
    /// access policy.
    pub fn owner_label(&self) -> String {
        match self {
            Caller::User(name) => name.clone(),
            Caller::Anonymous(origin) => format!("anon:{origin}"),
        }
    }

    /// Whether this caller owns an instance with the given owner label.
    pub fn owns(&self, owner: &str) -> bool {
        self.owner_label() == owner
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.owner_label())
    }
}

/// Ephemeral per-call bundle: who is calling and what they ask for.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub caller: Caller,
    pub action: ActionKind,
}

impl RequestContext {
    pub fn new(caller: Caller, action: ActionKind) -> Self {
        Self { caller, action }
    }
}
