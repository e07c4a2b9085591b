//! TOML scene files: a cube plus an ordered list of rigid transforms.
//!
//! ```toml
//! origin = [0.0, 0.0, 0.0]
//! side = 2.0
//!
//! [tolerance]
//! linear = 1e-9
//!
//! [[steps]]
//! op = "translate"
//! by = [1.0, 2.0, 3.0]
//!
//! [[steps]]
//! op = "rotate_x"
//! angle = 0.785398
//!
//! [[steps]]
//! op = "rotate"
//! axis = "z"
//! angle = 1.570796
//! ```
//!
//! Step ops are `translate`, `rotate_x`, `rotate_y`, `rotate_z`, and
//! `rotate` with an explicit `axis`.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use geo3d_primitives::{Axis, Cube3D, Point3D, Tolerance};
use serde::Deserialize;
use tracing::info;

/// A cube and the transforms to apply to it, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Origin corner. Required, but kept optional so a missing value is
    /// reported by the geometry layer.
    pub origin: Option<[f64; 3]>,
    pub side: f64,
    #[serde(default)]
    pub tolerance: Tolerance,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One rigid transform. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Translate { by: [f64; 3] },
    RotateX { angle: f64 },
    RotateY { angle: f64 },
    RotateZ { angle: f64 },
    Rotate { axis: Axis, angle: f64 },
}

impl Step {
    fn apply(&self, cube: &mut Cube3D) {
        match *self {
            Step::Translate { by: [dx, dy, dz] } => cube.translate(dx, dy, dz),
            Step::RotateX { angle } => cube.rotate_x(angle),
            Step::RotateY { angle } => cube.rotate_y(angle),
            Step::RotateZ { angle } => cube.rotate_z(angle),
            Step::Rotate { axis, angle } => cube.rotate(axis, angle),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Translate { by } => write!(f, "translate {by:?}"),
            Step::RotateX { angle } => write!(f, "rotate X by {angle}"),
            Step::RotateY { angle } => write!(f, "rotate Y by {angle}"),
            Step::RotateZ { angle } => write!(f, "rotate Z by {angle}"),
            Step::Rotate { axis, angle } => write!(f, "rotate {axis:?} by {angle}"),
        }
    }
}

impl Scene {
    pub fn from_toml(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene {}", path.display()))?;
        let scene =
            Self::from_toml(&src).with_context(|| format!("invalid scene {}", path.display()))?;
        info!(path = %path.display(), steps = scene.steps.len(), "loaded scene");
        Ok(scene)
    }

    /// Build the cube and run every step, calling `observe` after construction
    /// and after each step.
    pub fn run(&self, mut observe: impl FnMut(Option<&Step>, &Cube3D)) -> Result<Cube3D> {
        let mut cube = Cube3D::try_new(self.origin.map(Point3D::from), self.side)?;
        observe(None, &cube);
        for step in &self.steps {
            step.apply(&mut cube);
            observe(Some(step), &cube);
        }
        Ok(cube)
    }
}
