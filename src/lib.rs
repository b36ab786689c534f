//! Generic geometric primitives.
//!
//! Points are any type implementing [`geometry::PointLike`]; the built-in
//! [`geometry::Vector2x`] and [`geometry::Vector3x`] and the `nalgebra`
//! point and vector types all qualify. Algorithms in [`operations`] are
//! free functions over that trait, and [`geometry::Bezier`] curves can be
//! evaluated in constant context.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeoprimError, Result};
