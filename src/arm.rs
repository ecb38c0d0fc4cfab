//! Arm model: joint limits and forward kinematics for a chained
//! planar arm with 1-3 revolute links.
//!
//! Geometry queries take the configuration as an argument and are pure,
//! so the configuration-space builder can evaluate candidate poses in
//! any order (or in parallel) without mutating shared arm state.

use crate::core::{Configuration, MAX_JOINTS, Point2D, Segment};
use crate::geometry::compute_endpoint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arm description errors.
#[derive(Error, Debug)]
pub enum ArmError {
    #[error("arm must have 1-{MAX_JOINTS} links, got {0}")]
    BadLinkCount(usize),

    #[error("link {0} has non-positive length {1}")]
    BadLinkLength(usize, f32),

    #[error("joint {0} limits are inverted ({1} > {2})")]
    InvertedLimits(usize, f32, f32),

    #[error("joint {0} home angle {1} is outside its limits [{2}, {3}]")]
    HomeOutsideLimits(usize, f32, f32, f32),
}

/// One revolute link of a planar arm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Link {
    /// Link length in workspace units.
    pub length: f32,
    /// Minimum joint angle in degrees.
    pub min_deg: f32,
    /// Maximum joint angle in degrees.
    pub max_deg: f32,
    /// Joint angle of the starting configuration, in degrees.
    pub home_deg: f32,
}

/// Contract every arm consumed by the planner satisfies.
///
/// Links are chained: link k's base is link k-1's tip, so the first
/// link's geometry depends only on the first joint angle. The builder
/// relies on that to prune whole sub-volumes of the sweep.
pub trait ArmModel {
    /// Number of links, in 1..=3.
    fn link_count(&self) -> usize;

    /// Per-joint (min, max) angle limits in degrees.
    fn joint_limits(&self) -> &[(f32, f32)];

    /// The declared starting configuration.
    fn home_configuration(&self) -> Configuration;

    /// Link segments for the given configuration, base to tip.
    fn segments_at(&self, config: &Configuration) -> Vec<Segment>;

    /// End-effector position for the given configuration.
    fn end_effector_at(&self, config: &Configuration) -> Point2D {
        self.segments_at(config)
            .last()
            .map(|s| s.end)
            .unwrap_or_default()
    }
}

/// A planar arm anchored at a fixed base point.
///
/// Joint angles compose cumulatively: each link's world heading is the
/// sum of its own joint angle and the previous link's heading.
#[derive(Debug, Clone)]
pub struct PlanarArm {
    base: Point2D,
    lengths: Vec<f32>,
    limits: Vec<(f32, f32)>,
    home: Configuration,
}

impl PlanarArm {
    /// Create an arm from its base point and link descriptions.
    pub fn new(base: Point2D, links: &[Link]) -> Result<Self, ArmError> {
        if links.is_empty() || links.len() > MAX_JOINTS {
            return Err(ArmError::BadLinkCount(links.len()));
        }
        for (k, link) in links.iter().enumerate() {
            if link.length <= 0.0 {
                return Err(ArmError::BadLinkLength(k, link.length));
            }
            if link.min_deg > link.max_deg {
                return Err(ArmError::InvertedLimits(k, link.min_deg, link.max_deg));
            }
            if link.home_deg < link.min_deg || link.home_deg > link.max_deg {
                return Err(ArmError::HomeOutsideLimits(
                    k,
                    link.home_deg,
                    link.min_deg,
                    link.max_deg,
                ));
            }
        }

        let home: Vec<f32> = links.iter().map(|l| l.home_deg).collect();
        Ok(Self {
            base,
            lengths: links.iter().map(|l| l.length).collect(),
            limits: links.iter().map(|l| (l.min_deg, l.max_deg)).collect(),
            home: Configuration::new(&home),
        })
    }

    /// Base anchor point.
    #[inline]
    pub fn base(&self) -> Point2D {
        self.base
    }
}

impl ArmModel for PlanarArm {
    fn link_count(&self) -> usize {
        self.lengths.len()
    }

    fn joint_limits(&self) -> &[(f32, f32)] {
        &self.limits
    }

    fn home_configuration(&self) -> Configuration {
        self.home
    }

    fn segments_at(&self, config: &Configuration) -> Vec<Segment> {
        debug_assert_eq!(config.dof(), self.lengths.len());

        let mut segments = Vec::with_capacity(self.lengths.len());
        let mut cursor = self.base;
        let mut heading = 0.0;
        for (length, angle) in self.lengths.iter().zip(config.angles()) {
            heading += angle;
            let tip = compute_endpoint(cursor, *length, heading);
            segments.push(Segment::new(cursor, tip));
            cursor = tip;
        }
        segments
    }
}
