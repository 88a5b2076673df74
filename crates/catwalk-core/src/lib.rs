//! catwalk core: domain types and the unified error surface.
//!
//! This crate defines the entities the service reasons about (cats, their
//! owners, achievement tags), the closed set of action kinds, and the error
//! taxonomy shared by every layer. It intentionally carries no transport or
//! runtime dependencies so it can be reused by servers and tooling alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `CatwalkError`/`Result` so a process
//! embedding this crate does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{CatwalkError, Result};
