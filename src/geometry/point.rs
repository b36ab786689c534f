use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::math::Scalar;

/// A fixed-dimension tuple of one scalar type with indexed component access.
///
/// Every algorithm in [`crate::operations`] is written against this trait, so
/// foreign point types only need an impl (see [`crate::geometry::adapters`])
/// to be usable with them.
pub trait PointLike: Clone {
    /// Component type.
    type Scalar: Scalar;

    /// Number of components.
    const DIM: usize;

    /// Returns component `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= Self::DIM`.
    fn get(&self, axis: usize) -> Self::Scalar;

    /// Overwrites component `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= Self::DIM`.
    fn set(&mut self, axis: usize, value: Self::Scalar);

    /// Builds a point whose component `i` is `f(i)`.
    fn from_fn<F: FnMut(usize) -> Self::Scalar>(f: F) -> Self;

    /// Iterates over the components in axis order.
    fn coords(&self) -> impl Iterator<Item = Self::Scalar> + '_ {
        (0..Self::DIM).map(move |axis| self.get(axis))
    }
}

/// Two-dimensional vector with an optional auxiliary payload.
///
/// The payload is carried alongside the components but takes no part in
/// equality or arithmetic; arithmetic results get `X::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2x<T, X = ()> {
    pub x: T,
    pub y: T,
    pub payload: X,
}

/// Three-dimensional vector with an optional auxiliary payload.
///
/// The payload is carried alongside the components but takes no part in
/// equality or arithmetic; arithmetic results get `X::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3x<T, X = ()> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub payload: X,
}

pub type Vector2d = Vector2x<f64>;
pub type Vector3d = Vector3x<f64>;
pub type Vector2f = Vector2x<f32>;
pub type Vector3f = Vector3x<f32>;
pub type Vector2i = Vector2x<i32>;
pub type Vector3i = Vector3x<i32>;

impl<T> Vector2x<T> {
    /// Creates a vector without payload.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y, payload: () }
    }
}

impl<T, X> Vector2x<T, X> {
    /// Creates a vector carrying `payload`.
    #[must_use]
    pub const fn with_payload(x: T, y: T, payload: X) -> Self {
        Self { x, y, payload }
    }
}

impl<T> Vector3x<T> {
    /// Creates a vector without payload.
    #[must_use]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self {
            x,
            y,
            z,
            payload: (),
        }
    }
}

impl<T, X> Vector3x<T, X> {
    /// Creates a vector carrying `payload`.
    #[must_use]
    pub const fn with_payload(x: T, y: T, z: T, payload: X) -> Self {
        Self { x, y, z, payload }
    }
}

/// Implements the component-wise surface shared by both vector types.
macro_rules! impl_vector {
    ($vector:ident, $dim:literal, { $($axis:literal => $field:ident),+ }) => {
        impl<T: Scalar, X: Clone + Default> PointLike for $vector<T, X> {
            type Scalar = T;
            const DIM: usize = $dim;

            fn get(&self, axis: usize) -> T {
                match axis {
                    $($axis => self.$field,)+
                    _ => panic!("axis {axis} out of range for {}-dimensional point", $dim),
                }
            }

            fn set(&mut self, axis: usize, value: T) {
                match axis {
                    $($axis => self.$field = value,)+
                    _ => panic!("axis {axis} out of range for {}-dimensional point", $dim),
                }
            }

            fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
                Self {
                    $($field: f($axis),)+
                    payload: X::default(),
                }
            }
        }

        impl<T: PartialEq, X> PartialEq for $vector<T, X> {
            fn eq(&self, other: &Self) -> bool {
                $(self.$field == other.$field)&&+
            }
        }

        impl<T, X> Index<usize> for $vector<T, X> {
            type Output = T;

            fn index(&self, axis: usize) -> &T {
                match axis {
                    $($axis => &self.$field,)+
                    _ => panic!("axis {axis} out of range for {}-dimensional point", $dim),
                }
            }
        }

        impl<T, X> IndexMut<usize> for $vector<T, X> {
            fn index_mut(&mut self, axis: usize) -> &mut T {
                match axis {
                    $($axis => &mut self.$field,)+
                    _ => panic!("axis {axis} out of range for {}-dimensional point", $dim),
                }
            }
        }

        impl<T: Scalar, X: Default> Add for $vector<T, X> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self {
                    $($field: self.$field + rhs.$field,)+
                    payload: X::default(),
                }
            }
        }

        impl<T: Scalar, X: Default> Sub for $vector<T, X> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self {
                    $($field: self.$field - rhs.$field,)+
                    payload: X::default(),
                }
            }
        }

        impl<T: Scalar + Neg<Output = T>, X: Default> Neg for $vector<T, X> {
            type Output = Self;

            fn neg(self) -> Self {
                Self {
                    $($field: -self.$field,)+
                    payload: X::default(),
                }
            }
        }

        impl<T: Scalar, X: Default> Mul<T> for $vector<T, X> {
            type Output = Self;

            fn mul(self, scalar: T) -> Self {
                Self {
                    $($field: self.$field * scalar,)+
                    payload: X::default(),
                }
            }
        }

        /// Component-wise division. Integral division by zero panics like
        /// any integer division; use [`crate::operations::divide`] for a
        /// checked variant.
        impl<T: Scalar, X: Default> Div<T> for $vector<T, X> {
            type Output = Self;

            fn div(self, scalar: T) -> Self {
                Self {
                    $($field: self.$field / scalar,)+
                    payload: X::default(),
                }
            }
        }

        impl<T> From<[T; $dim]> for $vector<T> {
            fn from(coords: [T; $dim]) -> Self {
                let [$($field),+] = coords;
                Self {
                    $($field,)+
                    payload: (),
                }
            }
        }

        impl<T, X> From<$vector<T, X>> for [T; $dim] {
            fn from(vector: $vector<T, X>) -> Self {
                [$(vector.$field),+]
            }
        }
    };
}

impl_vector!(Vector2x, 2, { 0 => x, 1 => y });
impl_vector!(Vector3x, 3, { 0 => x, 1 => y, 2 => z });

/// `scalar * vector` for every primitive scalar.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<X: Default> Mul<Vector2x<$t, X>> for $t {
                type Output = Vector2x<$t, X>;

                fn mul(self, vector: Vector2x<$t, X>) -> Vector2x<$t, X> {
                    vector * self
                }
            }

            impl<X: Default> Mul<Vector3x<$t, X>> for $t {
                type Output = Vector3x<$t, X>;

                fn mul(self, vector: Vector3x<$t, X>) -> Vector3x<$t, X> {
                    vector * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: fmt::Display, X> fmt::Display for Vector2x<T, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl<T: fmt::Display, X> fmt::Display for Vector3x<T, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}
