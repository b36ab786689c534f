pub mod bernstein;
mod bezier;

pub use bezier::{evaluate_at, Bezier, ControlPoints};

use super::point::PointLike;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain<T> {
    /// Start of the parameter range.
    pub t_min: T,
    /// End of the parameter range.
    pub t_max: T,
}

impl<T> CurveDomain<T> {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: T, t_max: T) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves.
pub trait Curve {
    /// Point type the curve lives in.
    type Point: PointLike;

    /// Evaluates the curve at parameter `t`.
    ///
    /// Parameters outside [`Curve::domain`] extrapolate; they are not clamped.
    fn evaluate(&self, t: <Self::Point as PointLike>::Scalar) -> Self::Point;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain<<Self::Point as PointLike>::Scalar>;

    /// Returns whether the curve starts where it ends.
    fn is_closed(&self) -> bool;
}
