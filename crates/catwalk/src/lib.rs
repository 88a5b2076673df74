//! Top-level facade crate for catwalk.
//!
//! Re-exports core types and the API service library so users can depend on
//! a single crate.

pub mod core {
    pub use catwalk_core::*;
}

pub mod api {
    pub use catwalk_api::*;
}
