//! Axis-aligned cubes built from points and lines, transformed as rigid bodies.

use std::fmt;

use geo3d_math::{Axis, Tolerance, Transform};
use tracing::{error, info, warn};

use crate::error::{GeometryError, Result};
use crate::line::Line3D;
use crate::point::Point3D;

/// Unit offsets of the 8 corners from the origin corner.
///
/// Bottom face (z = 0) first, then the top face, each in the order
/// origin, +x, +y, +x+y. Edge generation indexes into this order.
const VERTEX_OFFSETS: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Vertex index pairs of the 12 edges.
const EDGE_INDICES: [(usize, usize); 12] = [
    // Bottom face
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    // Top face
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    // Vertical
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A cube with 8 vertices and the 12 edges joining them.
///
/// Vertex layout (at construction, before any transform):
/// ```text
///     v6----v7
///    /|    /|
///   v4----v5|    z
///   | v2--|-v3   | y
///   |/    |/     |/
///   v0----v1     +---x
/// ```
///
/// Edges are derived from the vertices and rebuilt after every transform,
/// so they always match the current vertex positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube3D {
    vertices: [Point3D; 8],
    edges: [Line3D; 12],
}

impl Cube3D {
    /// Build a cube with one corner at `origin`, extending `side_length`
    /// along +x, +y and +z.
    ///
    /// Fails with [`GeometryError::InvalidSideLength`] unless the side is
    /// positive and finite. The result is validated and a warning is emitted
    /// if its edges are inconsistent; that check never fails construction.
    pub fn new(origin: Point3D, side_length: f64) -> Result<Self> {
        if !(side_length > 0.0 && side_length.is_finite()) {
            error!(side_length, "cube side length must be positive");
            return Err(GeometryError::InvalidSideLength(side_length));
        }

        let vertices = generate_vertices(origin, side_length);
        let cube = Self {
            edges: generate_edges(&vertices),
            vertices,
        };

        info!(%origin, side_length, "created cube");
        if !cube.is_valid_cube() {
            warn!("generated cube may not be valid");
        }
        Ok(cube)
    }

    /// Build a cube from an origin that may be absent.
    pub fn try_new(origin: Option<Point3D>, side_length: f64) -> Result<Self> {
        match origin {
            Some(origin) => Self::new(origin, side_length),
            None => {
                error!("cube origin is missing");
                Err(GeometryError::MissingOperand("origin"))
            }
        }
    }

    /// The 8 vertices, bottom face first.
    pub fn vertices(&self) -> &[Point3D; 8] {
        &self.vertices
    }

    /// The 12 edges: bottom face, top face, then the vertical edges.
    pub fn edges(&self) -> &[Line3D; 12] {
        &self.edges
    }

    /// Whether all edges have the same length as the first, within [`Tolerance::DEFAULT`].
    pub fn is_valid_cube(&self) -> bool {
        self.is_valid_cube_within(&Tolerance::DEFAULT)
    }

    /// Edge-length consistency check with an explicit tolerance.
    ///
    /// Stops at the first mismatching edge.
    pub fn is_valid_cube_within(&self, tol: &Tolerance) -> bool {
        let reference = self.edges[0].length();
        for (index, edge) in self.edges.iter().enumerate() {
            let length = edge.length();
            if !tol.approx_eq(length, reference) {
                warn!(index, length, reference, "edge lengths are inconsistent");
                return false;
            }
        }
        info!("cube validation passed");
        true
    }

    /// Length of the first edge.
    pub fn side_length(&self) -> f64 {
        self.edges[0].length()
    }

    /// Total length of all 12 edges.
    pub fn perimeter(&self) -> f64 {
        let sum: f64 = self.edges.iter().map(Line3D::length).sum();
        info!(perimeter = sum, "computed cube perimeter");
        sum
    }

    /// Side length cubed.
    pub fn volume(&self) -> f64 {
        let side = self.side_length();
        let volume = side * side * side;
        info!(volume, "computed cube volume");
        volume
    }

    /// Shift every vertex by `(dx, dy, dz)`.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.apply(&Transform::translation(dx, dy, dz));
        info!(dx, dy, dz, "translated cube");
    }

    /// Rotate about the X axis through the world origin by `angle` radians.
    pub fn rotate_x(&mut self, angle: f64) {
        self.rotate(Axis::X, angle);
    }

    /// Rotate about the Y axis through the world origin by `angle` radians.
    pub fn rotate_y(&mut self, angle: f64) {
        self.rotate(Axis::Y, angle);
    }

    /// Rotate about the Z axis through the world origin by `angle` radians.
    pub fn rotate_z(&mut self, angle: f64) {
        self.rotate(Axis::Z, angle);
    }

    /// Rotate about a principal axis through the world origin by `angle` radians.
    pub fn rotate(&mut self, axis: Axis, angle: f64) {
        self.apply(&Transform::rotation(axis, angle));
        info!(?axis, angle, "rotated cube");
    }

    /// Apply `transform` to every vertex and rebuild the edges.
    ///
    /// Only rigid transforms keep the result a cube; use
    /// [`is_valid_cube`](Self::is_valid_cube) to check anything else.
    pub fn apply(&mut self, transform: &Transform) {
        self.replace_vertices(|v| v.transformed(transform));
    }

    fn replace_vertices(&mut self, f: impl Fn(Point3D) -> Point3D) {
        self.vertices = self.vertices.map(f);
        self.edges = generate_edges(&self.vertices);
    }
}

fn generate_vertices(origin: Point3D, side: f64) -> [Point3D; 8] {
    VERTEX_OFFSETS.map(|[ox, oy, oz]| origin.translate(ox * side, oy * side, oz * side))
}

fn generate_edges(vertices: &[Point3D; 8]) -> [Line3D; 12] {
    EDGE_INDICES.map(|(a, b)| Line3D::new(vertices[a], vertices[b]))
}

impl fmt::Display for Cube3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube3D[vertices=[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]]")
    }
}
