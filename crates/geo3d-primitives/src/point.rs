//! Immutable 3D points.

use std::fmt;

use geo3d_math::{deg_to_rad, Point3, Transform, Vec3};
use tracing::{debug, error, trace, warn};

use crate::error::{GeometryError, Result};

/// A coordinate in 3D space.
///
/// Points are plain values: every operation that would change a point
/// returns a new one instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    coords: Point3,
}

impl Point3D {
    /// Create a point from its three coordinates. Any `f64` is accepted.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        trace!(x, y, z, "created point");
        Self {
            coords: Point3::new(x, y, z),
        }
    }

    /// The point `(0, 0, 0)`.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Z coordinate.
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// The underlying nalgebra point.
    pub fn coords(&self) -> &Point3 {
        &self.coords
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(&self, other: &Point3D) -> Vec3 {
        other.coords - self.coords
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let distance = self.vector_to(other).norm();
        debug!(distance, "computed point distance");
        distance
    }

    /// Distance to an operand that may be absent.
    ///
    /// Returns [`GeometryError::MissingOperand`] for `None`.
    pub fn try_distance_to(&self, other: Option<&Point3D>) -> Result<f64> {
        match other {
            Some(other) => Ok(self.distance_to(other)),
            None => {
                warn!("distance requested to a missing point");
                Err(GeometryError::MissingOperand("point"))
            }
        }
    }

    /// Componentwise average of `self` and `other`.
    pub fn midpoint(&self, other: &Point3D) -> Point3D {
        let mid = nalgebra::center(&self.coords, &other.coords);
        debug!(x = mid.x, y = mid.y, z = mid.z, "computed midpoint");
        Point3D::from(mid)
    }

    /// Midpoint with an operand that may be absent.
    pub fn try_midpoint(&self, other: Option<&Point3D>) -> Result<Point3D> {
        match other {
            Some(other) => Ok(self.midpoint(other)),
            None => {
                error!("midpoint requested with a missing point");
                Err(GeometryError::MissingOperand("point"))
            }
        }
    }

    /// This point shifted by `(dx, dy, dz)`.
    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Point3D {
        Point3D::new(self.x() + dx, self.y() + dy, self.z() + dz)
    }

    /// Rotate about the X axis through the origin by `degrees`.
    pub fn rotate_around_x(&self, degrees: f64) -> Point3D {
        debug!(degrees, "rotating point around X");
        self.transformed(&Transform::rotation_x(deg_to_rad(degrees)))
    }

    /// Rotate about the Y axis through the origin by `degrees`.
    pub fn rotate_around_y(&self, degrees: f64) -> Point3D {
        debug!(degrees, "rotating point around Y");
        self.transformed(&Transform::rotation_y(deg_to_rad(degrees)))
    }

    /// Rotate about the Z axis through the origin by `degrees`.
    pub fn rotate_around_z(&self, degrees: f64) -> Point3D {
        debug!(degrees, "rotating point around Z");
        self.transformed(&Transform::rotation_z(deg_to_rad(degrees)))
    }

    /// Apply an affine transform.
    pub fn transformed(&self, transform: &Transform) -> Point3D {
        Point3D::from(transform.apply_point(&self.coords))
    }
}

impl Default for Point3D {
    fn default() -> Self {
        Self::origin()
    }
}

impl From<Point3> for Point3D {
    fn from(coords: Point3) -> Self {
        Self::new(coords.x, coords.y, coords.z)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point3D(x={:.2}, y={:.2}, z={:.2})",
            self.x(),
            self.y(),
            self.z()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::arbitrary_point;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_accessors() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
        assert_eq!(p.z(), 3.0);
        assert_eq!(Point3D::from([1.0, 2.0, 3.0]), p);
    }

    #[test]
    fn test_distance() {
        let p1 = Point3D::new(1.0, 2.0, 3.0);
        let p2 = Point3D::new(4.0, 6.0, 8.0);
        // sqrt(9 + 16 + 25)
        assert_abs_diff_eq!(p1.distance_to(&p2), 50f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let p1 = Point3D::new(1.0, 2.0, 3.0);
        let p2 = Point3D::new(4.0, 6.0, 8.0);
        let mid = p1.midpoint(&p2);
        assert_eq!(mid, Point3D::new(2.5, 4.0, 5.5));
    }

    #[test]
    fn test_missing_operand_is_an_error_not_a_sentinel() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(
            p.try_distance_to(None),
            Err(GeometryError::MissingOperand("point"))
        );
        assert_eq!(
            p.try_midpoint(None),
            Err(GeometryError::MissingOperand("point"))
        );
        assert_eq!(p.try_distance_to(Some(&p)), Ok(0.0));
    }

    #[test]
    fn test_rotate_z_90() {
        let r = Point3D::new(1.0, 2.0, 3.0).rotate_around_z(90.0);
        assert_abs_diff_eq!(r.x(), -2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.y(), 1.0, epsilon = 1e-9);
        assert_eq!(r.z(), 3.0);
    }

    #[test]
    fn test_rotate_x_90() {
        let r = Point3D::new(1.0, 2.0, 3.0).rotate_around_x(90.0);
        assert_eq!(r.x(), 1.0);
        assert_abs_diff_eq!(r.y(), -3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(r.z(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotate_y_90() {
        // Right-handed: +Z turns toward +X.
        let r = Point3D::new(1.0, 2.0, 3.0).rotate_around_y(90.0);
        assert_abs_diff_eq!(r.x(), 3.0, epsilon = 1e-9);
        assert_eq!(r.y(), 2.0);
        assert_abs_diff_eq!(r.z(), -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_preserves_distance_from_origin() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        let o = Point3D::origin();
        let d = p.distance_to(&o);
        for r in [
            p.rotate_around_x(45.0),
            p.rotate_around_y(30.0),
            p.rotate_around_z(-110.0),
        ] {
            assert_abs_diff_eq!(r.distance_to(&o), d, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_display() {
        let p = Point3D::new(1.0, -2.5, 3.14159);
        assert_eq!(p.to_string(), "Point3D(x=1.00, y=-2.50, z=3.14)");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(p in arbitrary_point(), q in arbitrary_point()) {
            prop_assert_eq!(p.distance_to(&q), q.distance_to(&p));
        }

        #[test]
        fn distance_to_self_is_zero(p in arbitrary_point()) {
            prop_assert_eq!(p.distance_to(&p), 0.0);
        }

        #[test]
        fn midpoint_is_equidistant(p in arbitrary_point(), q in arbitrary_point()) {
            let mid = p.midpoint(&q);
            prop_assert!((mid.distance_to(&p) - mid.distance_to(&q)).abs() < 1e-9);
        }

        #[test]
        fn rotation_round_trip(p in arbitrary_point(), degrees in -360.0..360.0f64) {
            let back = p.rotate_around_y(degrees).rotate_around_y(-degrees);
            prop_assert!(back.distance_to(&p) < 1e-9);
        }
    }
}
