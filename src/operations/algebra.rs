//! Component-wise vector algebra over any [`PointLike`] type.
//!
//! Operands must share scalar type and dimension. Both are checked while
//! compiling: the scalar through trait bounds, the dimension through inline
//! `const` assertions.

use num_traits::{Float, One, ToPrimitive, Zero};
use tracing::debug;

use crate::error::{AlgebraError, Result};
use crate::geometry::PointLike;
use crate::math::{self, Scalar, TOLERANCE};

type Real<P> = <<P as PointLike>::Scalar as Scalar>::Real;

/// Component-wise sum.
#[must_use]
pub fn add<P: PointLike>(lhs: &P, rhs: &P) -> P {
    P::from_fn(|i| lhs.get(i) + rhs.get(i))
}

/// Component-wise difference `lhs - rhs`.
///
/// # Panics
///
/// Unsigned components follow native subtraction: a negative difference
/// panics in debug builds. [`distance`] does not have this restriction.
#[must_use]
pub fn sub<P: PointLike>(lhs: &P, rhs: &P) -> P {
    P::from_fn(|i| lhs.get(i) - rhs.get(i))
}

/// Multiplies every component by `scalar`.
#[must_use]
pub fn scale<P: PointLike>(point: &P, scalar: P::Scalar) -> P {
    P::from_fn(|i| point.get(i) * scalar)
}

/// Divides every component by `scalar`.
///
/// Floating-point division by zero follows IEEE semantics.
///
/// # Errors
///
/// Returns [`AlgebraError::DivisionByZero`] for an integral zero divisor.
pub fn divide<P: PointLike>(point: &P, scalar: P::Scalar) -> Result<P> {
    if <P::Scalar as Scalar>::INTEGRAL && scalar.is_zero() {
        debug!("rejected integral division by zero");
        return Err(AlgebraError::DivisionByZero.into());
    }
    Ok(P::from_fn(|i| point.get(i) / scalar))
}

/// Sum of component-wise products.
///
/// The operands may be different point types as long as scalar and
/// dimension agree.
#[must_use]
pub fn dot_product<P, Q>(lhs: &P, rhs: &Q) -> P::Scalar
where
    P: PointLike,
    Q: PointLike<Scalar = P::Scalar>,
{
    const { assert!(P::DIM == Q::DIM, "dot product of points with different dimensions") };
    (0..P::DIM).fold(<P::Scalar as Zero>::zero(), |acc, i| acc + lhs.get(i) * rhs.get(i))
}

/// Euclidean length, `sqrt(dot_product(p, p))`.
#[must_use]
pub fn norm<P: PointLike>(point: &P) -> Real<P> {
    math::sqrt(dot_product(point, point))
}

/// Euclidean distance between two points, `norm(lhs - rhs)`.
///
/// Components are promoted to the real type before subtracting, so unsigned
/// points do not underflow.
#[must_use]
pub fn distance<P: PointLike>(lhs: &P, rhs: &P) -> Real<P> {
    let squared = (0..P::DIM).fold(<Real<P> as Zero>::zero(), |acc, i| {
        let d = lhs.get(i).to_real() - rhs.get(i).to_real();
        acc + d * d
    });
    math::real_sqrt(squared)
}

/// Whether two points lie within [`TOLERANCE`] of each other.
#[must_use]
pub fn coincident<P: PointLike>(lhs: &P, rhs: &P) -> bool {
    distance(lhs, rhs)
        .to_f64()
        .is_some_and(|d| d <= TOLERANCE)
}

/// Cross product of two three-dimensional points:
/// `(ay*bz - az*by, az*bx - ax*bz, ax*by - ay*bx)`.
///
/// # Panics
///
/// Like [`sub`], a negative component with unsigned scalars panics in debug
/// builds.
#[must_use]
pub fn vector_product<P: PointLike>(lhs: &P, rhs: &P) -> P {
    const { assert!(P::DIM == 3, "vector product is only defined in three dimensions") };
    let (ax, ay, az) = (lhs.get(0), lhs.get(1), lhs.get(2));
    let (bx, by, bz) = (rhs.get(0), rhs.get(1), rhs.get(2));
    let components = [ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx];
    P::from_fn(|i| components[i])
}

/// Angle between two vectors in radians, `acos(dot / (|lhs| * |rhs|))`.
///
/// The cosine is clamped to `[-1, 1]` so that rounding on (anti)parallel
/// input cannot produce NaN.
///
/// # Errors
///
/// Returns [`AlgebraError::ZeroVector`] if either operand has zero length,
/// regardless of the scalar type.
pub fn angle<P: PointLike>(lhs: &P, rhs: &P) -> Result<Real<P>> {
    let norm_product = norm(lhs) * norm(rhs);
    if norm_product.is_zero() {
        debug!(dimension = P::DIM, "angle of zero-length vector");
        return Err(AlgebraError::ZeroVector.into());
    }
    let one = <Real<P> as One>::one();
    let cosine = dot_product(lhs, rhs).to_real() / norm_product;
    Ok(Float::acos(Float::min(Float::max(cosine, -one), one)))
}
