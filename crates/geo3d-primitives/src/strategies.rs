//! Proptest strategies for points, lines and cube transforms.

use std::f64::consts::PI;

use proptest::prelude::*;

use crate::line::Line3D;
use crate::point::Point3D;

/// f64 values in `[-50, 50]`, biased toward zeros, round numbers and signs.
pub fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(PI),
            Just(-PI),
        ],
        -50.0..=50.0,
    ]
}

/// Points with coordinates drawn from [`scalar_strategy`].
pub fn arbitrary_point() -> impl Strategy<Value = Point3D> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Point3D::new(x, y, z))
}

/// Lines between two arbitrary points; may be degenerate.
pub fn arbitrary_line() -> impl Strategy<Value = Line3D> {
    (arbitrary_point(), arbitrary_point()).prop_map(|(a, b)| Line3D::new(a, b))
}

/// Strictly positive side lengths large enough to stay distinct from the origin.
pub fn side_length_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(1.0), Just(0.5), Just(10.0), 0.01..=100.0f64]
}

/// A single rigid transform step applied to a cube.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy)]
pub enum RigidStep {
    Translate(f64, f64, f64),
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
}

/// One translation or principal-axis rotation.
pub fn rigid_step() -> impl Strategy<Value = RigidStep> {
    let angle = -2.0 * PI..=2.0 * PI;
    prop_oneof![
        (scalar_strategy(), scalar_strategy(), scalar_strategy())
            .prop_map(|(dx, dy, dz)| RigidStep::Translate(dx, dy, dz)),
        angle.clone().prop_map(RigidStep::RotateX),
        angle.clone().prop_map(RigidStep::RotateY),
        angle.prop_map(RigidStep::RotateZ),
    ]
}

/// Up to `max_n` rigid steps.
pub fn rigid_steps(max_n: usize) -> impl Strategy<Value = Vec<RigidStep>> {
    prop::collection::vec(rigid_step(), 0..=max_n)
}
