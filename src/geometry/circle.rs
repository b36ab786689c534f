use num_traits::Zero;
use tracing::debug;

use crate::error::{GeometryError, Result};

use super::point::PointLike;

/// A circle given by its center and a non-negative radius.
///
/// The center must be two- or three-dimensional; other dimensions are
/// rejected while compiling.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle<P: PointLike> {
    center: P,
    radius: P::Scalar,
}

impl<P: PointLike> Circle<P> {
    /// Creates a new circle.
    ///
    /// A radius of zero is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius` is negative
    /// (or NaN).
    pub fn new(center: P, radius: P::Scalar) -> Result<Self> {
        const { assert!(P::DIM == 2 || P::DIM == 3, "circle center must be 2- or 3-dimensional") };
        check_radius(radius)?;
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &P {
        &self.center
    }

    /// Replaces the center.
    pub fn set_center(&mut self, center: P) {
        self.center = center;
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> P::Scalar {
        self.radius
    }

    /// Replaces the radius, keeping the old one on failure.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `radius` is negative
    /// (or NaN).
    pub fn set_radius(&mut self, radius: P::Scalar) -> Result<()> {
        check_radius(radius)?;
        self.radius = radius;
        Ok(())
    }
}

impl<P: PointLike + Default> Default for Circle<P> {
    fn default() -> Self {
        const { assert!(P::DIM == 2 || P::DIM == 3, "circle center must be 2- or 3-dimensional") };
        Self {
            center: P::default(),
            radius: P::Scalar::zero(),
        }
    }
}

fn check_radius<T: PartialOrd + Zero + std::fmt::Debug>(radius: T) -> Result<()> {
    if radius >= T::zero() {
        Ok(())
    } else {
        debug!(?radius, "rejected circle radius");
        Err(GeometryError::NegativeRadius(format!("{radius:?}")).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoprimError;
    use crate::geometry::{Vector2i, Vector3d};

    #[test]
    fn new_circle() {
        let c = Circle::new(Vector3d::new(1.0, 2.0, 3.0), 4.0).unwrap();
        assert_eq!(c.center(), &Vector3d::new(1.0, 2.0, 3.0));
        assert_eq!(c.radius(), 4.0);
    }

    #[test]
    fn zero_radius_is_valid() {
        let c = Circle::new(Vector2i::new(0, 0), 0).unwrap();
        assert_eq!(c.radius(), 0);
    }

    #[test]
    fn negative_radius() {
        let err = Circle::new(Vector3d::new(0.0, 0.0, 0.0), -1.0).unwrap_err();
        assert_eq!(
            err,
            GeoprimError::Geometry(GeometryError::NegativeRadius("-1.0".into()))
        );
        assert!(Circle::new(Vector2i::new(0, 0), -3).is_err());
    }

    #[test]
    fn nan_radius() {
        assert!(Circle::new(Vector3d::default(), f64::NAN).is_err());
    }

    #[test]
    fn set_radius_validates() {
        let mut c = Circle::new(Vector3d::default(), 1.0).unwrap();
        c.set_radius(2.5).unwrap();
        assert_eq!(c.radius(), 2.5);
        assert!(c.set_radius(-0.1).is_err());
        assert_eq!(c.radius(), 2.5);
    }

    #[test]
    fn set_center() {
        let mut c = Circle::new(Vector2i::new(0, 0), 1).unwrap();
        c.set_center(Vector2i::new(5, -5));
        assert_eq!(c.center(), &Vector2i::new(5, -5));
    }

    #[test]
    fn default_is_degenerate_at_origin() {
        let c = Circle::<Vector3d>::default();
        assert_eq!(c.center(), &Vector3d::new(0.0, 0.0, 0.0));
        assert_eq!(c.radius(), 0.0);
    }
}
