#![warn(missing_docs)]

//! Math types for the geo3d primitives.
//!
//! Thin wrappers around nalgebra providing the vector types, the
//! degeneracy tolerance, and the rigid transforms (translation and
//! principal-axis rotation) used by points, lines and cubes.
//!
//! # Rotation convention
//!
//! All rotations are right-handed: a positive angle turns counter-clockwise
//! when looking down the positive axis toward the origin.
//!
//! ```text
//! Rx(t): y' = y cos t - z sin t    z' =  y sin t + z cos t
//! Ry(t): x' = x cos t + z sin t    z' = -x sin t + z cos t
//! Rz(t): x' = x cos t - y sin t    y' =  x sin t + y cos t
//! ```

use nalgebra::{Matrix4, Vector3, Vector4};
use serde::Deserialize;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Magnitude below which a length, area or cross product is treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Convert an angle in degrees to radians.
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation about a principal axis through the origin by `angle` radians.
    pub fn rotation(axis: Axis, angle: f64) -> Self {
        match axis {
            Axis::X => Self::rotation_x(angle),
            Axis::Y => Self::rotation_y(angle),
            Axis::Z => Self::rotation_z(angle),
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }
}

/// Tolerance used for degeneracy and equality decisions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Linear tolerance: lengths and cross-product magnitudes below this are zero.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance ([`EPSILON`]).
    pub const DEFAULT: Self = Self { linear: EPSILON };

    /// Tolerance with the given linear threshold.
    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    /// Check if a scalar magnitude is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two scalars differ by no more than the tolerance.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
