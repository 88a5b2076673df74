//! catwalk API service library entry.
//!
//! This crate wires the config, throttle chain, access policy, query shaper,
//! action dispatcher, store, and REST transport into a cohesive service. It
//! is intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod obs;
pub mod ops;
pub mod policy;
pub mod query;
pub mod rest;
pub mod router;
pub mod store;
pub mod throttle;
