//! Persisted text form of a grid, for debugging and interop.
//!
//! One character per cell, one line per row. Axis 0 varies along a
//! line; higher axes select the line (axis 1) and the plane (axis 2),
//! with the last axis outermost. Reloading cannot reconstruct
//! continuous angles without the original axis minima and granularity,
//! so the text form is a one-way export.

use super::{CellState, Grid};
use std::fs;
use std::io;
use std::path::Path;

/// Cell character codes in the persisted form.
const WALL_CHAR: char = '%';
const FREE_CHAR: char = ' ';
const GOAL_CHAR: char = '.';
const START_CHAR: char = 'P';

fn cell_char(state: CellState) -> char {
    match state {
        CellState::Wall => WALL_CHAR,
        CellState::Free => FREE_CHAR,
        CellState::Goal => GOAL_CHAR,
        CellState::Start => START_CHAR,
    }
}

impl Grid {
    /// Render the grid in its persisted text form.
    pub fn to_text(&self) -> String {
        let dims = self.dimensions();
        let d0 = dims[0];
        let d1 = dims.get(1).copied().unwrap_or(1);
        let d2 = dims.get(2).copied().unwrap_or(1);

        let mut out = String::with_capacity((d0 + 1) * d1 * d2);
        let mut coords = vec![0usize; self.rank()];
        for c2 in 0..d2 {
            if self.rank() > 2 {
                coords[2] = c2;
            }
            for c1 in 0..d1 {
                if self.rank() > 1 {
                    coords[1] = c1;
                }
                for c0 in 0..d0 {
                    coords[0] = c0;
                    let index = crate::core::GridIndex::new(&coords);
                    out.push(cell_char(self.state_at(&index)));
                }
                out.push('\n');
            }
        }
        out
    }

    /// Write the persisted text form to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.to_text())
    }
}
