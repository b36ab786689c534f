//! [`PointLike`] for `nalgebra` points and vectors.
//!
//! With these impls the free algorithms accept `nalgebra` values directly,
//! e.g. `norm(&nalgebra::Vector3::new(1.0, 2.0, 2.0))`.

use nalgebra::{Point2, Point3, Vector2, Vector3};

use super::point::{PointLike, Vector2x, Vector3x};
use crate::math::Scalar;

macro_rules! impl_nalgebra_point_like {
    ($ty:ident, $dim:literal, $($axis:literal),+) => {
        impl<T: Scalar> PointLike for $ty<T> {
            type Scalar = T;
            const DIM: usize = $dim;

            fn get(&self, axis: usize) -> T {
                self[axis]
            }

            fn set(&mut self, axis: usize, value: T) {
                self[axis] = value;
            }

            fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
                $ty::new($(f($axis)),+)
            }
        }
    };
}

impl_nalgebra_point_like!(Point2, 2, 0, 1);
impl_nalgebra_point_like!(Point3, 3, 0, 1, 2);
impl_nalgebra_point_like!(Vector2, 2, 0, 1);
impl_nalgebra_point_like!(Vector3, 3, 0, 1, 2);

impl<T: Scalar, X> From<Vector2x<T, X>> for Point2<T> {
    fn from(v: Vector2x<T, X>) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl<T: Scalar, X> From<Vector3x<T, X>> for Point3<T> {
    fn from(v: Vector3x<T, X>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Point2<T>> for Vector2x<T> {
    fn from(p: Point2<T>) -> Self {
        Vector2x::new(p.x, p.y)
    }
}

impl<T: Scalar> From<Point3<T>> for Vector3x<T> {
    fn from(p: Point3<T>) -> Self {
        Vector3x::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Vector3d};
    use crate::operations::{area, distance, dot_product, norm, vector_product};
    use approx::assert_relative_eq;

    #[test]
    fn nalgebra_points_are_point_like() {
        let p = Point3::new(1.0, 2.0, 2.0);
        assert_eq!(<Point3<f64> as PointLike>::DIM, 3);
        assert_relative_eq!(norm(&p), 3.0);
        assert_relative_eq!(distance(&p, &Point3::origin()), 3.0);

        let mut q = Point2::new(3_i32, 4);
        PointLike::set(&mut q, 0, 6);
        assert_eq!(PointLike::get(&q, 0), 6);
        let built = <Point2<i32> as PointLike>::from_fn(|i| if i == 0 { 7 } else { 8 });
        assert_eq!(built, Point2::new(7, 8));
    }

    #[test]
    fn nalgebra_cross_product_agrees() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let ours = vector_product(&a, &b);
        let theirs = a.cross(&b);
        assert_relative_eq!(ours, theirs);
    }

    #[test]
    fn mixed_point_types_in_dot_product() {
        let ours = Vector3d::new(1.0, 2.0, 3.0);
        let theirs = Vector3::new(4.0, 5.0, 6.0);
        assert_relative_eq!(dot_product(&ours, &theirs), 32.0);
    }

    #[test]
    fn conversions_round_trip() {
        let v = Vector3d::new(1.5, -2.0, 0.25);
        let p: Point3<f64> = v.into();
        assert_eq!(p, Point3::new(1.5, -2.0, 0.25));
        assert_eq!(Vector3d::from(p), v);
    }

    #[test]
    fn circle_around_nalgebra_center() {
        let circle = Circle::new(Point2::new(1.0, 1.0), 2.0).unwrap();
        assert_relative_eq!(area(&circle), 4.0 * std::f64::consts::PI);
    }
}
