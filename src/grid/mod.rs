//! Discretized configuration-space grid.
//!
//! The grid is a dense N-dimensional array (N = link count, 1-3) of
//! classified cells over the arm's joint-angle ranges, stored as a flat
//! buffer with per-axis strides. One generic routine handles index
//! mapping, bounds checks and neighbor enumeration for every rank
//! instead of per-arity copies.
//!
//! Once built the grid is immutable, except for the [`Grid::set_start`]
//! and [`Grid::set_goals`] override hooks used by test harnesses to
//! re-run searches from arbitrary cells.

mod export;

use crate::core::{Configuration, GridIndex};

/// Classification of one configuration-space cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Colliding with an obstacle, sweeping a goal, or out of window
    Wall,
    /// Traversable, not a goal
    Free,
    /// End-effector touches a goal region
    Goal,
    /// The arm's declared starting configuration
    Start,
}

/// One joint-angle axis of the grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Axis {
    /// Angle of index 0 on this axis, in degrees.
    pub(crate) min_deg: f32,
    /// Number of samples along this axis.
    pub(crate) samples: usize,
}

/// The configuration-space grid.
#[derive(Debug, Clone)]
pub struct Grid {
    granularity: f32,
    axes: Vec<Axis>,
    /// Flat cell buffer; axis 0 is the slowest-varying axis.
    cells: Vec<CellState>,
    strides: Vec<usize>,
    start: GridIndex,
    goals: Vec<GridIndex>,
}

impl Grid {
    pub(crate) fn new(
        axes: Vec<Axis>,
        granularity: f32,
        cells: Vec<CellState>,
        start: GridIndex,
        goals: Vec<GridIndex>,
    ) -> Self {
        debug_assert_eq!(cells.len(), axes.iter().map(|a| a.samples).product());

        let mut strides = vec![1; axes.len()];
        for k in (0..axes.len().saturating_sub(1)).rev() {
            strides[k] = strides[k + 1] * axes[k + 1].samples;
        }

        Self {
            granularity,
            axes,
            cells,
            strides,
            start,
            goals,
        }
    }

    /// Number of grid axes (= arm link count).
    #[inline]
    pub fn rank(&self) -> usize {
        self.axes.len()
    }

    /// Cell count per axis.
    pub fn dimensions(&self) -> Vec<usize> {
        self.axes.iter().map(|a| a.samples).collect()
    }

    /// Angular step between adjacent cells, in degrees.
    #[inline]
    pub fn granularity(&self) -> f32 {
        self.granularity
    }

    /// Map a configuration to its cell index by rounding each angle to
    /// the nearest lattice point. `None` if any axis falls outside the
    /// grid.
    pub fn angle_to_index(&self, config: &Configuration) -> Option<GridIndex> {
        if config.dof() != self.rank() {
            return None;
        }
        let mut coords = [0usize; crate::core::MAX_JOINTS];
        for (k, axis) in self.axes.iter().enumerate() {
            let i = ((config.angle(k) - axis.min_deg) / self.granularity).round() as i64;
            if i < 0 || i as usize >= axis.samples {
                return None;
            }
            coords[k] = i as usize;
        }
        Some(GridIndex::new(&coords[..self.rank()]))
    }

    /// Map a cell index back to the configuration at its lattice point.
    pub fn index_to_angle(&self, index: &GridIndex) -> Configuration {
        debug_assert!(self.is_valid_index(index));
        let mut angles = [0.0f32; crate::core::MAX_JOINTS];
        for (k, axis) in self.axes.iter().enumerate() {
            angles[k] = axis.min_deg + index.axis(k) as f32 * self.granularity;
        }
        Configuration::new(&angles[..self.rank()])
    }

    /// Whether every axis index lies within the grid bounds.
    pub fn is_valid_index(&self, index: &GridIndex) -> bool {
        index.rank() == self.rank()
            && index
                .coords()
                .iter()
                .zip(&self.axes)
                .all(|(&i, axis)| i < axis.samples)
    }

    #[inline]
    fn flat(&self, index: &GridIndex) -> usize {
        index
            .coords()
            .iter()
            .zip(&self.strides)
            .map(|(i, s)| i * s)
            .sum()
    }

    /// Cell state at a valid index.
    #[inline]
    pub fn state_at(&self, index: &GridIndex) -> CellState {
        self.cells[self.flat(index)]
    }

    /// Classify a configuration via index lookup. `None` if the
    /// configuration lies outside the grid.
    pub fn classify(&self, config: &Configuration) -> Option<CellState> {
        self.angle_to_index(config).map(|i| self.state_at(&i))
    }

    /// Number of cells carrying the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// In-bounds, non-Wall cells one granularity step away along a
    /// single axis. No diagonal moves.
    pub fn neighbor_indices(&self, index: &GridIndex) -> Vec<GridIndex> {
        let mut neighbors = Vec::with_capacity(2 * self.rank());
        for k in 0..self.rank() {
            for step in [1i64, -1] {
                let moved = index.axis(k) as i64 + step;
                if moved < 0 || moved as usize >= self.axes[k].samples {
                    continue;
                }
                let mut coords = [0usize; crate::core::MAX_JOINTS];
                coords[..self.rank()].copy_from_slice(index.coords());
                coords[k] = moved as usize;
                let neighbor = GridIndex::new(&coords[..self.rank()]);
                if self.state_at(&neighbor) != CellState::Wall {
                    neighbors.push(neighbor);
                }
            }
        }
        neighbors
    }

    /// Neighboring configurations of `config`, as angle tuples.
    pub fn neighbors(&self, config: &Configuration) -> Vec<Configuration> {
        match self.angle_to_index(config) {
            Some(index) => self
                .neighbor_indices(&index)
                .iter()
                .map(|i| self.index_to_angle(i))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Index of the start cell.
    #[inline]
    pub fn start_index(&self) -> GridIndex {
        self.start
    }

    /// The start configuration.
    pub fn start(&self) -> Configuration {
        self.index_to_angle(&self.start)
    }

    /// Indices of the goal cells.
    #[inline]
    pub fn goal_indices(&self) -> &[GridIndex] {
        &self.goals
    }

    /// Goal configurations (a fresh copy on every call).
    pub fn goals(&self) -> Vec<Configuration> {
        self.goals.iter().map(|i| self.index_to_angle(i)).collect()
    }

    /// Override the start cell. Returns false (and leaves the start
    /// unchanged) when the configuration lies outside the grid.
    ///
    /// Cell labels are not rewritten; searches take the start from this
    /// index regardless of the underlying classification.
    pub fn set_start(&mut self, config: &Configuration) -> bool {
        match self.angle_to_index(config) {
            Some(index) => {
                self.start = index;
                true
            }
            None => false,
        }
    }

    /// Override the goal set, dropping configurations that lie outside
    /// the grid. Cell labels are not rewritten.
    pub fn set_goals(&mut self, goals: &[Configuration]) {
        self.goals = goals
            .iter()
            .filter_map(|c| self.angle_to_index(c))
            .collect();
    }
}
