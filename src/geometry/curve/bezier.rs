use std::marker::PhantomData;

use num_traits::{Float, One, Zero};
use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::point::{PointLike, Vector2x, Vector3x};
use crate::operations::coincident;

use super::bernstein::{self, pow_f32, pow_f64, Coefficients, MAX_DEGREE, MIN_DEGREE};
use super::{Curve, CurveDomain};

/// Storage backing the control points of a [`Bezier`] curve.
pub trait ControlPoints<P> {
    /// Length fixed by the type, if any.
    const FIXED_LEN: Option<usize>;

    fn as_slice(&self) -> &[P];

    fn as_mut_slice(&mut self) -> &mut [P];
}

impl<P, const K: usize> ControlPoints<P> for [P; K] {
    const FIXED_LEN: Option<usize> = Some(K);

    fn as_slice(&self) -> &[P] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [P] {
        self
    }
}

impl<P> ControlPoints<P> for Vec<P> {
    const FIXED_LEN: Option<usize> = None;

    fn as_slice(&self) -> &[P] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [P] {
        self
    }
}

impl<P> ControlPoints<P> for Box<[P]> {
    const FIXED_LEN: Option<usize> = None;

    fn as_slice(&self) -> &[P] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [P] {
        self
    }
}

/// A Bezier curve of degree `N` with `N + 1` control points stored in `C`.
///
/// `N` must lie in `1..=10`, and an array backing must hold exactly `N + 1`
/// points; both are checked while compiling. Heap backings are checked once
/// at construction. Control points can be edited in place through
/// [`Bezier::control_points_mut`], but their count cannot change.
///
/// ```
/// use geoprim::geometry::{Bezier, Vector2d};
///
/// let curve = Bezier::<2, Vector2d, _>::from_array([
///     Vector2d::new(0.0, 0.0),
///     Vector2d::new(1.0, 2.0),
///     Vector2d::new(2.0, 0.0),
/// ]);
/// assert_eq!(curve.evaluate_at(0.5), Vector2d::new(1.0, 1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier<const N: usize, P, C = Vec<P>> {
    ctrls: C,
    marker: PhantomData<P>,
}

impl<const N: usize, P, C: ControlPoints<P>> Bezier<N, P, C> {
    const SHAPE: () = {
        assert!(
            N >= MIN_DEGREE && N <= MAX_DEGREE,
            "bezier degree must lie in 1..=10"
        );
        if let Some(len) = C::FIXED_LEN {
            assert!(len == N + 1, "control point array must hold degree + 1 points");
        }
    };

    /// Creates a curve from its control points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ControlPointCount`] if `ctrls` does not hold
    /// exactly `N + 1` points.
    pub fn new(ctrls: C) -> Result<Self> {
        let () = Self::SHAPE;
        let actual = ctrls.as_slice().len();
        if actual != N + 1 {
            debug!(degree = N, actual, "rejected bezier control points");
            return Err(GeometryError::ControlPointCount {
                expected: N + 1,
                actual,
            }
            .into());
        }
        trace!(degree = N, "bezier curve");
        Ok(Self {
            ctrls,
            marker: PhantomData,
        })
    }

    /// Degree of the curve.
    #[must_use]
    pub const fn degree(&self) -> usize {
        N
    }

    /// The `N + 1` control points in order.
    #[must_use]
    pub fn control_points(&self) -> &[P] {
        self.ctrls.as_slice()
    }

    /// Mutable view of the control points.
    pub fn control_points_mut(&mut self) -> &mut [P] {
        self.ctrls.as_mut_slice()
    }

    /// Consumes the curve, returning its storage.
    pub fn into_inner(self) -> C {
        self.ctrls
    }
}

impl<const N: usize, P, const K: usize> Bezier<N, P, [P; K]> {
    /// Creates an array-backed curve; usable in constants.
    #[must_use]
    pub const fn from_array(ctrls: [P; K]) -> Self {
        let () = Self::SHAPE;
        Self {
            ctrls,
            marker: PhantomData,
        }
    }

    /// The control points as an array.
    #[must_use]
    pub const fn as_array(&self) -> &[P; K] {
        &self.ctrls
    }
}

impl<const N: usize, P> Bezier<N, P, Vec<P>> {
    /// Collects the control points from an iterator.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ControlPointCount`] if the iterator does not
    /// yield exactly `N + 1` points.
    pub fn try_from_iter<I: IntoIterator<Item = P>>(iter: I) -> Result<Self> {
        Self::new(iter.into_iter().collect())
    }
}

impl<const N: usize, P: Default, const K: usize> Default for Bezier<N, P, [P; K]> {
    fn default() -> Self {
        Self::from_array(std::array::from_fn(|_| P::default()))
    }
}

impl<const N: usize, P: Default> Default for Bezier<N, P, Vec<P>> {
    fn default() -> Self {
        let () = Self::SHAPE;
        Self {
            ctrls: (0..=N).map(|_| P::default()).collect(),
            marker: PhantomData,
        }
    }
}

impl<const N: usize, P, C> Bezier<N, P, C>
where
    P: PointLike,
    P::Scalar: Float,
    C: ControlPoints<P>,
{
    /// Evaluates the Bernstein form at `t`.
    ///
    /// `t` is usually in `[0, 1]`; other values extrapolate the polynomial.
    #[must_use]
    pub fn evaluate_at(&self, t: P::Scalar) -> P {
        bernstein::evaluate::<N, P>(self.ctrls.as_slice(), t)
    }
}

/// Free-function form of [`Bezier::evaluate_at`].
#[must_use]
pub fn evaluate_at<const N: usize, P, C>(curve: &Bezier<N, P, C>, t: P::Scalar) -> P
where
    P: PointLike,
    P::Scalar: Float,
    C: ControlPoints<P>,
{
    curve.evaluate_at(t)
}

impl<const N: usize, P, C> Curve for Bezier<N, P, C>
where
    P: PointLike,
    P::Scalar: Float,
    C: ControlPoints<P>,
{
    type Point = P;

    fn evaluate(&self, t: P::Scalar) -> P {
        self.evaluate_at(t)
    }

    fn domain(&self) -> CurveDomain<P::Scalar> {
        CurveDomain::new(P::Scalar::zero(), P::Scalar::one())
    }

    fn is_closed(&self) -> bool {
        let ctrls = self.ctrls.as_slice();
        coincident(&ctrls[0], &ctrls[N])
    }
}

/// Constant-evaluable `evaluate_at` for array-backed curves of the built-in
/// vectors. Produces results bit-identical to the runtime path.
macro_rules! impl_const_evaluate {
    ($vector:ident { $($field:ident),+ }, $t:ty, $pow:ident) => {
        impl<const N: usize, const K: usize> Bezier<N, $vector<$t>, [$vector<$t>; K]> {
            /// Evaluates the curve at `t` inside constant evaluation.
            ///
            /// Same arithmetic, in the same order, as [`Bezier::evaluate_at`].
            #[must_use]
            #[allow(clippy::cast_precision_loss)]
            pub const fn evaluate_at_const(&self, t: $t) -> $vector<$t> {
                let coefficients = Coefficients::<N>::TABLE;
                let one_minus_t = 1.0 - t;
                let first = coefficients[0] as $t * $pow(one_minus_t, N) * $pow(t, 0);
                let mut acc = $vector::new($(first * self.ctrls[0].$field),+);
                let mut i = 1;
                while i <= N {
                    let w = coefficients[i] as $t * $pow(one_minus_t, N - i) * $pow(t, i);
                    $(acc.$field = acc.$field + w * self.ctrls[i].$field;)+
                    i += 1;
                }
                acc
            }
        }
    };
}

impl_const_evaluate!(Vector2x { x, y }, f64, pow_f64);
impl_const_evaluate!(Vector3x { x, y, z }, f64, pow_f64);
impl_const_evaluate!(Vector2x { x, y }, f32, pow_f32);
impl_const_evaluate!(Vector3x { x, y, z }, f32, pow_f32);
