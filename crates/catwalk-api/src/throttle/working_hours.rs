//! Temporal admission gate.
//!
//! Stateless: the decision depends only on the current wall-clock hour (UTC),
//! never on caller identity or history.

use chrono::{Timelike, Utc};

use crate::context::RequestContext;

use super::chain::{Admission, AdmissionCheck};

/// Denies every request whose UTC hour falls outside `[open_hour, close_hour)`.
#[derive(Debug)]
pub struct WorkingHoursGate {
    open_hour: u32,
    close_hour: u32,
}

impl WorkingHoursGate {
    pub fn new(open_hour: u32, close_hour: u32) -> Self {
        Self {
            open_hour,
            close_hour,
        }
    }

    /// Window membership for a given hour of day.
    pub fn allows_hour(&self, hour: u32) -> bool {
        (self.open_hour..self.close_hour).contains(&hour)
    }

    /// Seconds from `secs_of_day` (seconds since UTC midnight) until the
    /// window next opens. Used as the Retry-After hint.
    pub fn secs_until_open(&self, secs_of_day: u64) -> u64 {
        let open = u64::from(self.open_hour) * 3600;
        if secs_of_day < open {
            open - secs_of_day
        } else {
            86_400 - secs_of_day + open
        }
    }
}

impl AdmissionCheck for WorkingHoursGate {
    fn name(&self) -> &'static str {
        "working_hours"
    }

    fn admit(&self, _ctx: &RequestContext) -> Admission {
        let now = Utc::now();
        if self.allows_hour(now.hour()) {
            Admission::Allow
        } else {
            Admission::Deny {
                check: self.name(),
                retry_after_secs: self.secs_until_open(u64::from(now.num_seconds_from_midnight())),
            }
        }
    }
}
