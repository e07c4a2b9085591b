//! Directed line segments and line-to-line distance.

use std::fmt;

use geo3d_math::{Tolerance, Vec3};
use tracing::{debug, error, warn};

use crate::error::{GeometryError, Result};
use crate::point::Point3D;

/// A segment from `start` to `end`.
///
/// Distance queries treat the segment as the infinite line through both
/// endpoints. A segment whose endpoints coincide is allowed and has length 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3D {
    start: Point3D,
    end: Point3D,
}

impl Line3D {
    /// Create a segment between two points.
    pub fn new(start: Point3D, end: Point3D) -> Self {
        if start == end {
            warn!(%start, "line endpoints coincide; length will be zero");
        }
        debug!(%start, %end, "created line");
        Self { start, end }
    }

    /// Create a segment from endpoints that may be absent.
    ///
    /// Fails with [`GeometryError::MissingEndpoint`] unless both are present.
    pub fn try_new(start: Option<Point3D>, end: Option<Point3D>) -> Result<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Ok(Self::new(start, end)),
            _ => {
                error!("cannot create a line with a missing endpoint");
                Err(GeometryError::MissingEndpoint)
            }
        }
    }

    /// Start point.
    pub fn start(&self) -> Point3D {
        self.start
    }

    /// End point.
    pub fn end(&self) -> Point3D {
        self.end
    }

    /// Direction vector `end - start`.
    pub fn direction(&self) -> Vec3 {
        self.start.vector_to(&self.end)
    }

    /// Euclidean length of the segment.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point3D {
        self.start.midpoint(&self.end)
    }

    /// Whether the two direction vectors are parallel (or anti-parallel).
    pub fn is_parallel_to(&self, other: &Line3D) -> bool {
        self.is_parallel_to_within(other, &Tolerance::DEFAULT)
    }

    /// Parallelism test with an explicit tolerance on `|u x v|`.
    pub fn is_parallel_to_within(&self, other: &Line3D, tol: &Tolerance) -> bool {
        let cross = self.direction().cross(&other.direction());
        let parallel = tol.is_zero(cross.norm());
        debug!(parallel, "checked line parallelism");
        parallel
    }

    /// Parallelism test against a line that may be absent. `None` is never parallel.
    pub fn is_parallel_to_opt(&self, other: Option<&Line3D>) -> bool {
        match other {
            Some(other) => self.is_parallel_to(other),
            None => {
                warn!("parallelism requested against a missing line");
                false
            }
        }
    }

    /// Shortest distance between the infinite lines through `self` and `other`.
    pub fn shortest_distance_to(&self, other: &Line3D) -> f64 {
        self.shortest_distance_within(other, &Tolerance::DEFAULT)
    }

    /// Shortest line-to-line distance with an explicit degeneracy tolerance.
    ///
    /// Skew lines use `|w . (u x v)| / |u x v|` where `u`, `v` are the
    /// direction vectors and `w` joins the two start points. When `|u x v|`
    /// is below tolerance the lines are parallel and the result is the
    /// distance from `other.start` to `self`.
    pub fn shortest_distance_within(&self, other: &Line3D, tol: &Tolerance) -> f64 {
        let u = self.direction();
        let v = other.direction();
        let w = other.start.vector_to(&self.start);

        let cross = u.cross(&v);
        let cross_mag = cross.norm();
        if tol.is_zero(cross_mag) {
            warn!("lines are parallel; using point-to-line distance");
            return self.point_to_line_distance_within(&other.start, tol);
        }

        let distance = w.dot(&cross).abs() / cross_mag;
        debug!(distance, "computed skew line distance");
        distance
    }

    /// Shortest distance to a line that may be absent.
    pub fn try_shortest_distance_to(&self, other: Option<&Line3D>) -> Result<f64> {
        match other {
            Some(other) => Ok(self.shortest_distance_to(other)),
            None => {
                warn!("distance requested to a missing line");
                Err(GeometryError::MissingOperand("line"))
            }
        }
    }

    /// Perpendicular distance from `point` to the infinite line through the segment.
    pub fn point_to_line_distance(&self, point: &Point3D) -> f64 {
        self.point_to_line_distance_within(point, &Tolerance::DEFAULT)
    }

    /// Point-to-line distance, `|AB x AP| / |AB|`, with an explicit tolerance.
    ///
    /// A zero-length segment has no direction, so the distance to its single
    /// point is returned instead.
    pub fn point_to_line_distance_within(&self, point: &Point3D, tol: &Tolerance) -> f64 {
        let ab = self.direction();
        let base = ab.norm();
        if tol.is_zero(base) {
            warn!("point-to-line distance on a zero-length line; using point distance");
            return self.start.distance_to(point);
        }

        let ap = self.start.vector_to(point);
        let height = ab.cross(&ap).norm() / base;
        debug!(distance = height, "computed point-to-line distance");
        height
    }

    /// Point-to-line distance for a point that may be absent.
    pub fn try_point_to_line_distance(&self, point: Option<&Point3D>) -> Result<f64> {
        match point {
            Some(point) => Ok(self.point_to_line_distance(point)),
            None => {
                error!("point-to-line distance requested for a missing point");
                Err(GeometryError::MissingOperand("point"))
            }
        }
    }
}

impl fmt::Display for Line3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line3D[{} -> {}]", self.start, self.end)
    }
}
