mod scalar;

pub use scalar::Scalar;

use num_traits::{Float, FloatConst};

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Square root, promoting integral input to `f64`.
///
/// Negative and infinite inputs yield NaN instead of failing.
#[must_use]
pub fn sqrt<T: Scalar>(x: T) -> T::Real {
    real_sqrt(x.to_real())
}

/// [`sqrt`] on an already promoted value.
pub(crate) fn real_sqrt<R: Float>(x: R) -> R {
    if x >= R::zero() && x < R::infinity() {
        x.sqrt()
    } else {
        R::nan()
    }
}

macro_rules! const_sqrt_impl {
    ($(#[$meta:meta])* $name:ident, $t:ty) => {
        $(#[$meta])*
        #[must_use]
        pub const fn $name(x: $t) -> $t {
            if !(x >= 0.0 && x < <$t>::INFINITY) {
                return <$t>::NAN;
            }
            let mut curr = x;
            let mut prev = 0.0;
            while curr != prev {
                let next = 0.5 * (curr + x / curr);
                // two-cycle between neighbouring values
                if next == prev {
                    break;
                }
                prev = curr;
                curr = next;
            }
            curr
        }
    };
}

const_sqrt_impl!(
    /// Newton-Raphson square root usable in constant evaluation.
    ///
    /// Seeds with `x` and iterates `0.5 * (curr + x / curr)` until two
    /// successive iterates compare equal. Agrees with [`f64::sqrt`] to within
    /// an ulp; at runtime prefer [`sqrt`].
    const_sqrt,
    f64
);

const_sqrt_impl!(
    /// `f32` flavour of [`const_sqrt`].
    const_sqrt_f32,
    f32
);

/// Converts radians to degrees: `radians * 180 / pi`.
#[must_use]
pub fn radians_to_degrees<T: Scalar>(radians: T) -> T::Real {
    radians.to_real() * T::Real::from_count(180) / T::Real::PI()
}

/// Converts degrees to radians: `degrees / 180 * pi`.
///
/// Integral degrees promote to `f64`.
#[must_use]
pub fn degrees_to_radians<T: Scalar>(degrees: T) -> T::Real {
    degrees.to_real() / T::Real::from_count(180) * T::Real::PI()
}

/// Smaller of two values; on a tie the first one wins.
#[must_use]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Larger of two values; on a tie the first one wins.
#[must_use]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        b
    } else {
        a
    }
}

/// Minimum of two or more values, reduced left to right with [`math::min`](crate::math::min).
#[macro_export]
macro_rules! min {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {{
        let acc = $crate::math::min($first, $second);
        $(let acc = $crate::math::min(acc, $rest);)*
        acc
    }};
}

/// Maximum of two or more values, reduced left to right with [`math::max`](crate::math::max).
#[macro_export]
macro_rules! max {
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {{
        let acc = $crate::math::max($first, $second);
        $(let acc = $crate::math::max(acc, $rest);)*
        acc
    }};
}
