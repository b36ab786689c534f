use num_traits::{Float, One, Zero};

use crate::math::Scalar;
use crate::operations::{coincident, distance};

use super::curve::{Curve, CurveDomain};
use super::point::PointLike;

/// A straight segment between two points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line<P> {
    start: P,
    end: P,
}

impl<P: PointLike> Line<P> {
    /// Creates a new line from `start` to `end`.
    #[must_use]
    pub fn new(start: P, end: P) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &P {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &P {
        &self.end
    }

    pub fn set_start(&mut self, start: P) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: P) {
        self.end = end;
    }

    /// Distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> <P::Scalar as Scalar>::Real {
        distance(&self.start, &self.end)
    }
}

/// Linear interpolation on `[0, 1]`: `start + t * (end - start)`.
impl<P> Curve for Line<P>
where
    P: PointLike,
    P::Scalar: Float,
{
    type Point = P;

    fn evaluate(&self, t: P::Scalar) -> P {
        P::from_fn(|i| {
            let a = self.start.get(i);
            a + t * (self.end.get(i) - a)
        })
    }

    fn domain(&self) -> CurveDomain<P::Scalar> {
        CurveDomain::new(P::Scalar::zero(), P::Scalar::one())
    }

    fn is_closed(&self) -> bool {
        coincident(&self.start, &self.end)
    }
}
