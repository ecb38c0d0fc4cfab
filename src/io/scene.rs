//! TOML scene description: the arm, the workspace window, obstacle and
//! goal regions, and the sweep granularity.
//!
//! ```toml
//! granularity = 10.0
//!
//! [window]
//! width = 200.0
//! height = 200.0
//!
//! [arm]
//! base = { x = 100.0, y = 100.0 }
//! links = [{ length = 10.0, min_deg = 0.0, max_deg = 90.0, home_deg = 0.0 }]
//!
//! [[goals]]
//! x = 100.0
//! y = 90.0
//! radius = 1.0
//! ```

use crate::arm::{ArmError, Link, PlanarArm};
use crate::core::{Circle, Point2D, Window};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Scene loading errors.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid arm description: {0}")]
    Arm(#[from] ArmError),
}

/// Arm description within a scene.
#[derive(Debug, Clone, Deserialize)]
pub struct ArmConfig {
    /// Base anchor point of the first link.
    pub base: Point2D,
    /// Links, base to tip.
    pub links: Vec<Link>,
}

/// A full planning scene.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    /// Angular step in degrees for the configuration sweep.
    pub granularity: f32,
    /// Workspace window.
    pub window: Window,
    /// Arm description.
    pub arm: ArmConfig,
    /// Obstacle regions.
    #[serde(default)]
    pub obstacles: Vec<Circle>,
    /// Goal regions.
    #[serde(default)]
    pub goals: Vec<Circle>,
}

impl SceneConfig {
    /// Parse a scene from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a scene from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SceneError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Construct the scene's arm.
    pub fn build_arm(&self) -> Result<PlanarArm, SceneError> {
        Ok(PlanarArm::new(self.arm.base, &self.arm.links)?)
    }
}

impl Default for SceneConfig {
    /// A minimal demo scene: a single 10-unit link sweeping a quarter
    /// turn toward one goal directly above the base.
    fn default() -> Self {
        Self {
            granularity: 10.0,
            window: Window::new(200.0, 200.0),
            arm: ArmConfig {
                base: Point2D::new(100.0, 100.0),
                links: vec![Link {
                    length: 10.0,
                    min_deg: 0.0,
                    max_deg: 90.0,
                    home_deg: 0.0,
                }],
            },
            obstacles: Vec::new(),
            goals: vec![Circle::new(100.0, 90.0, 1.0)],
        }
    }
}
