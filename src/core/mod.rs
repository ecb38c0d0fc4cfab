//! Foundation types shared by every layer of the planner.

pub mod types;

pub use types::{Circle, Configuration, GridIndex, MAX_JOINTS, Point2D, Segment, Window};
