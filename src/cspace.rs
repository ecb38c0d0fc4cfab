//! Configuration-space builder.
//!
//! Sweeps the Cartesian product of every joint's angle range at the
//! requested granularity, classifies each configuration through the
//! geometry oracle, and produces the search-ready [`Grid`].
//!
//! Classification order per cell:
//! 1. Wall if any link intersects an obstacle or leaves the window.
//! 2. Wall if a link sweeps through a goal region while the
//!    end-effector is not itself touching a goal (forbids "passing
//!    through" a goal without arriving).
//! 3. Goal if the end-effector touches a goal region.
//! 4. Free otherwise.
//!
//! The cell holding the arm's home configuration is forced to Start
//! last, overwriting any other label: the declared start must be usable
//! even when it is geometrically degenerate.

use crate::arm::ArmModel;
use crate::core::{Circle, Configuration, GridIndex, MAX_JOINTS, Window};
use crate::geometry::{arm_touches_regions, end_effector_reaches_goal, segments_within_window};
use crate::grid::{Axis, CellState, Grid};
use log::debug;
use thiserror::Error;

/// Fatal grid construction errors.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("granularity must be positive, got {0}")]
    BadGranularity(f32),

    #[error("no start cell: home configuration falls outside the grid")]
    NoStartCell,

    #[error("no goal cell: no configuration reaches a goal region")]
    NoGoalCell,
}

/// Build the configuration grid for `arm` over the given scene.
///
/// Each axis gets `ceil((max - min) / granularity) + 1` samples, so a
/// granularity that does not evenly divide a joint's range rounds the
/// last sample past the declared maximum. The same rounding is used by
/// [`Grid::angle_to_index`], keeping the sweep and the lookup aligned.
pub fn build_grid<A: ArmModel>(
    arm: &A,
    goals: &[Circle],
    obstacles: &[Circle],
    window: Window,
    granularity: f32,
) -> Result<Grid, BuildError> {
    if !(granularity > 0.0) {
        return Err(BuildError::BadGranularity(granularity));
    }

    let limits = arm.joint_limits();
    let rank = arm.link_count();
    debug_assert!((1..=MAX_JOINTS).contains(&rank));
    debug_assert_eq!(limits.len(), rank);

    let axes: Vec<Axis> = limits
        .iter()
        .map(|&(min, max)| Axis {
            min_deg: min,
            samples: ((max - min) / granularity).ceil() as usize + 1,
        })
        .collect();
    let dims: Vec<usize> = axes.iter().map(|a| a.samples).collect();
    let total: usize = dims.iter().product();

    // Axis 0 is the slowest-varying axis, so all cells sharing a first
    // joint angle form one contiguous block.
    let mut strides = vec![1usize; rank];
    for k in (0..rank.saturating_sub(1)).rev() {
        strides[k] = strides[k + 1] * dims[k + 1];
    }
    let block = strides[0];

    let angle_at = |k: usize, i: usize| axes[k].min_deg + i as f32 * granularity;

    let mut cells = vec![CellState::Free; total];
    for a0 in 0..dims[0] {
        // A first link that already collides or leaves the window on
        // its own condemns every configuration of the remaining joints,
        // since link geometry is chained: skip the whole block.
        if rank >= 2 {
            let mut probe = [0.0f32; MAX_JOINTS];
            probe[0] = angle_at(0, a0);
            for k in 1..rank {
                probe[k] = axes[k].min_deg;
            }
            let segments = arm.segments_at(&Configuration::new(&probe[..rank]));
            let first = &segments[..1];
            if arm_touches_regions(first, obstacles) || !segments_within_window(first, &window) {
                cells[a0 * block..(a0 + 1) * block].fill(CellState::Wall);
                continue;
            }
        }

        for rest in 0..block {
            let mut angles = [0.0f32; MAX_JOINTS];
            angles[0] = angle_at(0, a0);
            let mut rem = rest;
            for k in 1..rank {
                angles[k] = angle_at(k, rem / strides[k]);
                rem %= strides[k];
            }
            let config = Configuration::new(&angles[..rank]);
            cells[a0 * block + rest] = classify_configuration(arm, &config, goals, obstacles, &window);
        }
    }

    // Locate the home cell and force it to Start.
    let home = arm.home_configuration();
    let mut start_coords = [0usize; MAX_JOINTS];
    for k in 0..rank {
        let i = ((home.angle(k) - axes[k].min_deg) / granularity).round() as i64;
        if i < 0 || i as usize >= dims[k] {
            return Err(BuildError::NoStartCell);
        }
        start_coords[k] = i as usize;
    }
    let start = GridIndex::new(&start_coords[..rank]);
    let start_flat: usize = start
        .coords()
        .iter()
        .zip(&strides)
        .map(|(i, s)| i * s)
        .sum();
    cells[start_flat] = CellState::Start;

    let goal_indices: Vec<GridIndex> = (0..total)
        .filter(|&flat| cells[flat] == CellState::Goal)
        .map(|flat| {
            let mut coords = [0usize; MAX_JOINTS];
            let mut rem = flat;
            for k in 0..rank {
                coords[k] = rem / strides[k];
                rem %= strides[k];
            }
            GridIndex::new(&coords[..rank])
        })
        .collect();
    if goal_indices.is_empty() {
        return Err(BuildError::NoGoalCell);
    }

    let walls = cells.iter().filter(|&&c| c == CellState::Wall).count();
    debug!(
        "configuration grid built: dims={:?}, walls={}, goals={}, free={}",
        dims,
        walls,
        goal_indices.len(),
        total - walls - goal_indices.len() - 1
    );

    Ok(Grid::new(axes, granularity, cells, start, goal_indices))
}

fn classify_configuration<A: ArmModel>(
    arm: &A,
    config: &Configuration,
    goals: &[Circle],
    obstacles: &[Circle],
    window: &Window,
) -> CellState {
    let segments = arm.segments_at(config);
    if arm_touches_regions(&segments, obstacles) || !segments_within_window(&segments, window) {
        return CellState::Wall;
    }

    let tip = segments.last().map(|s| s.end).unwrap_or_default();
    if end_effector_reaches_goal(tip, goals) {
        return CellState::Goal;
    }
    if arm_touches_regions(&segments, goals) {
        // A link grazes a goal region without the end-effector arriving.
        return CellState::Wall;
    }
    CellState::Free
}
