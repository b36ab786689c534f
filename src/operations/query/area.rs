use num_traits::FloatConst;

use crate::geometry::{Circle, PointLike};
use crate::math::Scalar;

/// Shapes with an enclosed area.
pub trait Area {
    /// Numeric type of the result.
    type Output;

    /// Returns the enclosed area.
    fn area(&self) -> Self::Output;
}

/// `pi * r^2`, evaluated in the real type of the center's scalar.
///
/// Integral radii are promoted before squaring, so the result never
/// truncates.
impl<P: PointLike> Area for Circle<P> {
    type Output = <P::Scalar as Scalar>::Real;

    fn area(&self) -> Self::Output {
        let r = self.radius().to_real();
        <Self::Output as FloatConst>::PI() * r * r
    }
}

/// Computes the area of `shape`.
#[must_use]
pub fn area<S: Area>(shape: &S) -> S::Output {
    shape.area()
}
