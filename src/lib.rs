//! BhujaPlan - configuration-space motion planning for planar arms
//!
//! Plans collision-free motion for a planar robotic arm with 1-3
//! revolute links. Obstacles and goals are circular regions in a
//! rectangular workspace window; the planner discretizes the arm's
//! joint-angle space into a grid at a fixed angular granularity,
//! classifies every configuration through an exact segment/circle
//! collision oracle, and searches the grid for a shortest sequence of
//! single-joint moves whose final pose touches a goal.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      bin/                           │  ← Executable
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Scene loading
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   planning/                         │  ← Graph search
//! │              (bfs, dfs, greedy, astar)              │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                cspace + grid/                       │  ← Discretization
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │               arm + geometry                        │  ← Kinematics and
//! │                                                     │    collision oracle
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation types
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use bhuja_plan::{
//!     Circle, Link, PlanarArm, Point2D, Window, build_grid, search,
//! };
//!
//! let arm = PlanarArm::new(
//!     Point2D::new(100.0, 100.0),
//!     &[Link {
//!         length: 10.0,
//!         min_deg: 0.0,
//!         max_deg: 90.0,
//!         home_deg: 0.0,
//!     }],
//! )
//! .unwrap();
//!
//! let goals = [Circle::new(100.0, 90.0, 1.0)];
//! let grid = build_grid(&arm, &goals, &[], Window::new(200.0, 200.0), 10.0).unwrap();
//!
//! let result = search(&grid, "astar");
//! assert_eq!(result.path.len(), 10);
//! ```
//!
//! The grid is read-only after construction and may be shared across
//! concurrent searches; each search owns its frontier and explored set
//! privately.

pub mod arm;
pub mod core;
pub mod cspace;
pub mod geometry;
pub mod grid;
pub mod io;
pub mod planning;

pub use arm::{ArmError, ArmModel, Link, PlanarArm};
pub use core::{Circle, Configuration, GridIndex, MAX_JOINTS, Point2D, Segment, Window};
pub use cspace::{BuildError, build_grid};
pub use grid::{CellState, Grid};
pub use io::{ArmConfig, SceneConfig, SceneError};
pub use planning::{SearchMethod, SearchResult, search};
