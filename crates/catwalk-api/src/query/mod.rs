//! Collection shaping (filter, search, order).

pub mod shaper;

pub use shaper::{shape, ShapeParams};
