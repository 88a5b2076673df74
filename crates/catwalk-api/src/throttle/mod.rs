//! Admission layer (throttling).
//!
//! Every request passes the throttle chain before any authorization or query
//! work happens. Checks are evaluated in fixed order and the first denial
//! short-circuits the rest; a request is admitted only if all checks allow.
//! Denial is a normal outcome (the caller waits), never a fatal error.

pub mod chain;
pub mod scoped_rate;
pub mod working_hours;

pub use chain::{Admission, AdmissionCheck, ThrottleChain};
pub use scoped_rate::{RateScope, ScopedRateCounter};
pub use working_hours::WorkingHoursGate;
