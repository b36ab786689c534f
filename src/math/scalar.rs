use std::fmt::Debug;

use num_traits::{Float, FloatConst, Num, NumCast};

/// Numeric type usable as a point component.
///
/// Integral scalars promote to `f64` wherever a result cannot be represented
/// in the scalar itself (square roots, angles, areas). Floating-point scalars
/// keep their own precision.
pub trait Scalar: Copy + Debug + PartialOrd + Num + NumCast + 'static {
    /// Floating-point type results are promoted to.
    type Real: Scalar + Float + FloatConst;

    /// Whether the scalar is an integer type.
    const INTEGRAL: bool;

    /// Promotes the value to [`Scalar::Real`].
    fn to_real(self) -> Self::Real;

    /// Converts a small count (binomial coefficient, literal) with `as` semantics.
    fn from_count(n: u64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Real = $t;
                const INTEGRAL: bool = false;

                #[inline]
                fn to_real(self) -> $t {
                    self
                }

                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn from_count(n: u64) -> Self {
                    n as $t
                }
            }
        )*
    };
}

macro_rules! impl_integral_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Real = f64;
                const INTEGRAL: bool = true;

                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn to_real(self) -> f64 {
                    self as f64
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_count(n: u64) -> Self {
                    n as $t
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
impl_integral_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn promote<T: Scalar>(x: T) -> T::Real {
        x.to_real()
    }

    #[test]
    fn integral_flag() {
        assert!(i32::INTEGRAL);
        assert!(u8::INTEGRAL);
        assert!(!f32::INTEGRAL);
        assert!(!f64::INTEGRAL);
    }

    #[test]
    fn integers_promote_to_f64() {
        let r: f64 = promote(7_i32);
        assert_eq!(r, 7.0);
        let r: f64 = promote(255_u8);
        assert_eq!(r, 255.0);
    }

    #[test]
    fn floats_keep_precision() {
        let r: f32 = promote(1.5_f32);
        assert_eq!(r, 1.5);
    }

    #[test]
    fn from_count_casts() {
        assert_eq!(f64::from_count(252), 252.0);
        assert_eq!(i16::from_count(180), 180);
    }
}
