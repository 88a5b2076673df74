//! Authorization layer.
//!
//! A fixed two-rule access model: one policy variant per action kind,
//! selected before evaluation by an exhaustive match. Denial here is an
//! authorization rejection, distinct from not-found: existence is readable,
//! mutation is blocked.

pub mod access;

pub use access::{AccessDecision, AccessPolicy};
