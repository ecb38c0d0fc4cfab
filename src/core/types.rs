//! Geometric and configuration-space primitives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of revolute joints supported by the planner.
pub const MAX_JOINTS: usize = 3;

/// A 2D point in workspace units.
///
/// The workspace origin is the top-left corner of the window and the
/// y axis grows downward, matching the rendering convention of the
/// surrounding tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, other: &Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A directed line segment, one per arm link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Link base
    pub start: Point2D,
    /// Link tip
    pub end: Point2D,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }
}

/// A circular region, used uniformly for obstacles and goals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center x coordinate
    pub x: f32,
    /// Center y coordinate
    pub y: f32,
    /// Radius (boundary included)
    pub radius: f32,
}

impl Circle {
    /// Create a new circle.
    #[inline]
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Center as a point.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Whether the point lies inside or on the circle.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.distance_squared(&self.center()) <= self.radius * self.radius
    }
}

/// The admissible workspace rectangle.
///
/// Spans `[0, width]` in x and `[0, height]` in y, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    /// Width in workspace units
    pub width: f32,
    /// Height in workspace units
    pub height: f32,
}

impl Window {
    /// Create a new window.
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the point lies inside the window (boundary included).
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// An ordered tuple of 1-3 joint angles in degrees, fully determining
/// the arm pose.
///
/// Unused trailing slots are zeroed so that equality on the backing
/// array is equality on the joint values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    angles: [f32; MAX_JOINTS],
    dof: usize,
}

impl Configuration {
    /// Create a configuration from 1-3 joint angles in degrees.
    ///
    /// # Panics
    /// Panics if `angles` is empty or has more than [`MAX_JOINTS`] entries.
    pub fn new(angles: &[f32]) -> Self {
        assert!(
            !angles.is_empty() && angles.len() <= MAX_JOINTS,
            "configuration must have 1-{} joints, got {}",
            MAX_JOINTS,
            angles.len()
        );
        let mut buf = [0.0; MAX_JOINTS];
        buf[..angles.len()].copy_from_slice(angles);
        Self {
            angles: buf,
            dof: angles.len(),
        }
    }

    /// Number of joints.
    #[inline]
    pub fn dof(&self) -> usize {
        self.dof
    }

    /// Joint angles in degrees.
    #[inline]
    pub fn angles(&self) -> &[f32] {
        &self.angles[..self.dof]
    }

    /// Angle of joint `axis` in degrees.
    #[inline]
    pub fn angle(&self, axis: usize) -> f32 {
        self.angles()[axis]
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, a) in self.angles().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{a:.1}")?;
        }
        write!(f, ")")
    }
}

/// Position of a cell in the configuration grid, one index per joint.
///
/// Like [`Configuration`], unused trailing slots are zeroed so derived
/// equality and hashing behave as tuple equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    coords: [usize; MAX_JOINTS],
    rank: usize,
}

impl GridIndex {
    /// Create an index from 1-3 per-axis positions.
    ///
    /// # Panics
    /// Panics if `coords` is empty or has more than [`MAX_JOINTS`] entries.
    pub fn new(coords: &[usize]) -> Self {
        assert!(
            !coords.is_empty() && coords.len() <= MAX_JOINTS,
            "grid index must have 1-{} axes, got {}",
            MAX_JOINTS,
            coords.len()
        );
        let mut buf = [0; MAX_JOINTS];
        buf[..coords.len()].copy_from_slice(coords);
        Self {
            coords: buf,
            rank: coords.len(),
        }
    }

    /// Number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Per-axis positions.
    #[inline]
    pub fn coords(&self) -> &[usize] {
        &self.coords[..self.rank]
    }

    /// Position along `axis`.
    #[inline]
    pub fn axis(&self, axis: usize) -> usize {
        self.coords()[axis]
    }

    /// Manhattan distance to another index of the same rank.
    #[inline]
    pub fn manhattan(&self, other: &GridIndex) -> usize {
        self.coords()
            .iter()
            .zip(other.coords())
            .map(|(a, b)| a.abs_diff(*b))
            .sum()
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coords().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
