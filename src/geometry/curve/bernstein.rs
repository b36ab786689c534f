//! Bernstein basis for Bezier evaluation.
//!
//! A degree-`n` curve is `sum_{i=0}^{n} C(n, i) (1 - t)^(n - i) t^i P_i`.
//! Binomial coefficients come from `const fn` factorial ratios and are
//! materialised once per degree as an associated constant, so they are
//! fixed at compile time and shared by every curve of that degree.

use num_traits::Float;

use crate::geometry::point::PointLike;
use crate::math::Scalar;

/// Lowest supported Bezier degree.
pub const MIN_DEGREE: usize = 1;

/// Highest supported Bezier degree.
pub const MAX_DEGREE: usize = 10;

/// `n!`, computed at compile time when used in a constant.
#[must_use]
pub const fn factorial(n: u64) -> u64 {
    let mut acc = 1;
    let mut i = 2;
    while i <= n {
        acc *= i;
        i += 1;
    }
    acc
}

/// `C(n, k) = n! / (k! (n - k)!)`; zero when `k > n`.
#[must_use]
pub const fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    factorial(n) / (factorial(k) * factorial(n - k))
}

/// Row `degree` of Pascal's triangle, padded with zeros to `MAX_DEGREE + 1`.
///
/// # Panics
///
/// Panics (at compile time in constant context) if `degree > MAX_DEGREE`.
#[must_use]
pub const fn binomial_coefficients(degree: usize) -> [u64; MAX_DEGREE + 1] {
    assert!(degree <= MAX_DEGREE, "bezier degree exceeds MAX_DEGREE");
    let mut table = [0; MAX_DEGREE + 1];
    let mut i = 0;
    while i <= degree {
        table[i] = binomial(degree as u64, i as u64);
        i += 1;
    }
    table
}

/// Per-degree coefficient table.
pub(crate) struct Coefficients<const N: usize>;

impl<const N: usize> Coefficients<N> {
    pub(crate) const TABLE: [u64; MAX_DEGREE + 1] = binomial_coefficients(N);
}

/// `base^exp` by repeated multiplication.
pub(crate) fn pow<T: Float>(base: T, exp: usize) -> T {
    if exp == 0 {
        return T::one();
    }
    let mut result = base;
    for _ in 1..exp {
        result = result * base;
    }
    result
}

macro_rules! const_pow {
    ($name:ident, $t:ty) => {
        /// Constant-evaluable twin of `pow`, same multiplication order.
        pub(crate) const fn $name(base: $t, exp: usize) -> $t {
            if exp == 0 {
                return 1.0;
            }
            let mut result = base;
            let mut i = 1;
            while i < exp {
                result *= base;
                i += 1;
            }
            result
        }
    };
}

const_pow!(pow_f64, f64);
const_pow!(pow_f32, f32);

/// Weight of control point `i` on a degree-`N` curve at `t`.
///
/// # Panics
///
/// Panics if `i > N`.
#[must_use]
pub fn weight<const N: usize, T: Scalar + Float>(i: usize, t: T) -> T {
    assert!(i <= N, "control point index {i} exceeds degree {N}");
    let coefficient = T::from_count(Coefficients::<N>::TABLE[i]);
    coefficient * pow(T::one() - t, N - i) * pow(t, i)
}

/// Evaluates the Bernstein sum over `ctrls`, which must hold `N + 1` points.
pub(crate) fn evaluate<const N: usize, P>(ctrls: &[P], t: P::Scalar) -> P
where
    P: PointLike,
    P::Scalar: Float,
{
    let first = weight::<N, _>(0, t);
    let mut acc = P::from_fn(|axis| first * ctrls[0].get(axis));
    for (i, ctrl) in ctrls.iter().enumerate().take(N + 1).skip(1) {
        let w = weight::<N, _>(i, t);
        for axis in 0..P::DIM {
            acc.set(axis, acc.get(axis) + w * ctrl.get(axis));
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
    }

    #[test]
    fn pascal_rows() {
        const CUBIC: [u64; MAX_DEGREE + 1] = binomial_coefficients(3);
        assert_eq!(&CUBIC[..4], &[1, 3, 3, 1]);
        assert!(CUBIC[4..].iter().all(|&c| c == 0));
        assert_eq!(
            binomial_coefficients(10),
            [1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1]
        );
        assert_eq!(Coefficients::<1>::TABLE[..2], [1, 1]);
        assert_eq!(binomial(4, 5), 0);
    }

    #[test]
    fn rows_are_symmetric() {
        for n in MIN_DEGREE..=MAX_DEGREE {
            let row = binomial_coefficients(n);
            for k in 0..=n {
                assert_eq!(row[k], row[n - k]);
            }
        }
    }

    #[test]
    fn pow_by_repeated_multiplication() {
        assert_eq!(pow(2.0_f64, 0), 1.0);
        assert_eq!(pow(2.0_f64, 1), 2.0);
        assert_eq!(pow(2.0_f64, 10), 1024.0);
        assert_eq!(pow_f64(0.3, 7).to_bits(), pow(0.3_f64, 7).to_bits());
        assert_eq!(pow_f32(0.3, 7).to_bits(), pow(0.3_f32, 7).to_bits());
    }

    #[test]
    fn weights_partition_unity() {
        for t in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            let sum: f64 = (0..=5).map(|i| weight::<5, f64>(i, t)).sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "control point index 4 exceeds degree 3")]
    fn weight_index_past_degree_panics() {
        let _ = weight::<3, f64>(4, 0.5);
    }

    #[test]
    #[should_panic(expected = "exceeds degree")]
    fn weight_index_past_table_panics() {
        let _ = weight::<10, f64>(11, 0.5);
    }

    #[test]
    fn endpoint_weights() {
        assert_eq!(weight::<4, f64>(0, 0.0), 1.0);
        assert_eq!(weight::<4, f64>(4, 0.0), 0.0);
        assert_eq!(weight::<4, f64>(4, 1.0), 1.0);
        assert_eq!(weight::<4, f64>(0, 1.0), 0.0);
    }
}
