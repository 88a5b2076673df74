//! Scoped fixed-window rate counter.
//!
//! Counters are keyed by (caller bucket, scope) and expire lazily: the first
//! touch after the window elapses resets the slot. The increment and the
//! budget comparison happen under one map-entry guard, so two near-simultaneous
//! requests can never both observe the last free slot.
//!
//! The counter advances on every evaluation whether or not the request is
//! later admitted: throttling counts attempts, not successes.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::context::RequestContext;

use super::chain::{Admission, AdmissionCheck};

/// A named rate-limit bucket with its own budget, distinct from other scopes.
#[derive(Debug, Clone)]
pub struct RateScope {
    pub name: String,
    pub budget: u32,
    pub window: Duration,
}

#[derive(Debug)]
struct WindowSlot {
    started: Instant,
    count: u32,
}

/// Per-identity request counter for one scope.
pub struct ScopedRateCounter {
    scope: RateScope,
    slots: DashMap<String, WindowSlot>,
}

impl ScopedRateCounter {
    pub fn new(scope: RateScope) -> Self {
        Self {
            scope,
            slots: DashMap::new(),
        }
    }

    pub fn scope_name(&self) -> &str {
        &self.scope.name
    }

    /// Record one attempt for `key` and return (count in current window,
    /// time left in that window). Atomic: the entry guard holds the shard
    /// lock across reset, increment, and read.
    fn touch(&self, key: &str) -> (u32, Duration) {
        let mut slot = self
            .slots
            .entry(key.to_string())
            .or_insert_with(|| WindowSlot {
                started: Instant::now(),
                count: 0,
            });

        let elapsed = slot.started.elapsed();
        if elapsed >= self.scope.window {
            slot.started = Instant::now();
            slot.count = 0;
        }
        slot.count = slot.count.saturating_add(1);

        let remaining = self.scope.window.saturating_sub(slot.started.elapsed());
        (slot.count, remaining)
    }

    /// Attempts recorded for `key` in its current window. Zero if the key was
    /// never throttle-evaluated.
    pub fn hits(&self, key: &str) -> u32 {
        self.slots.get(key).map(|s| s.count).unwrap_or(0)
    }
}

impl AdmissionCheck for ScopedRateCounter {
    fn name(&self) -> &'static str {
        "scoped_rate"
    }

    fn admit(&self, ctx: &RequestContext) -> Admission {
        let (count, remaining) = self.touch(&ctx.caller.bucket_key());
        if count <= self.scope.budget {
            Admission::Allow
        } else {
            Admission::Deny {
                check: self.name(),
                retry_after_secs: remaining.as_secs().max(1),
            }
        }
    }
}
