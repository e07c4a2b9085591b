#![warn(missing_docs)]

//! Point, line and cube primitives for geo3d.
//!
//! - [`Point3D`]: an immutable coordinate with distance, midpoint and
//!   per-axis rotation (in degrees).
//! - [`Line3D`]: a directed segment with length, parallelism and
//!   shortest-distance queries.
//! - [`Cube3D`]: 8 vertices and 12 derived edges, moved as a rigid body
//!   (rotations in radians about the world origin).
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see
//! them. Without one they cost nothing and never affect results.
//!
//! # Example
//!
//! ```
//! use geo3d_primitives::{Cube3D, Point3D};
//!
//! let mut cube = Cube3D::new(Point3D::origin(), 1.0)?;
//! assert_eq!(cube.volume(), 1.0);
//! cube.rotate_z(std::f64::consts::FRAC_PI_4);
//! assert!(cube.is_valid_cube());
//! # Ok::<(), geo3d_primitives::GeometryError>(())
//! ```

pub mod cube;
pub mod error;
pub mod line;
pub mod point;

#[cfg(test)]
pub mod strategies;

pub use cube::Cube3D;
pub use error::{GeometryError, Result};
pub use geo3d_math::{Axis, Tolerance, Transform, EPSILON};
pub use line::Line3D;
pub use point::Point3D;
