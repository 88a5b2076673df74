//! The ordered admission chain.

use std::sync::Arc;

use crate::context::RequestContext;

/// Decision from a single admission check, or from the whole chain.
#[derive(Debug, Clone)]
pub enum Admission {
    Allow,
    Deny {
        /// Which check denied (for logs/metrics; order matters for
        /// observability, not for the final outcome).
        check: &'static str,
        /// Hint for the Retry-After header.
        retry_after_secs: u64,
    },
}

impl Admission {
    pub fn is_allow(&self) -> bool {
        matches!(self, Admission::Allow)
    }
}

/// One admission check. Checks must be independent of each other; any state
/// they keep is their own.
pub trait AdmissionCheck: Send + Sync {
    fn name(&self) -> &'static str;
    fn admit(&self, ctx: &RequestContext) -> Admission;
}

/// Ordered sequence of admission checks.
/// Construct once at startup, then share via Arc.
pub struct ThrottleChain {
    checks: Vec<Arc<dyn AdmissionCheck>>,
}

impl ThrottleChain {
    pub fn new(checks: Vec<Arc<dyn AdmissionCheck>>) -> Self {
        Self { checks }
    }

    /// Evaluate checks in order; the first denial wins and later checks are
    /// not evaluated at all.
    pub fn admit(&self, ctx: &RequestContext) -> Admission {
        for check in &self.checks {
            let decision = check.admit(ctx);
            if !decision.is_allow() {
                return decision;
            }
        }
        Admission::Allow
    }
}
