//! Depth-first search.
//!
//! Last-in-first-out frontier: returns some path when one exists, with
//! no shortest-path guarantee.

use super::{SearchResult, reconstruct_path};
use crate::core::GridIndex;
use crate::grid::Grid;
use std::collections::{HashMap, HashSet};

pub(crate) fn dfs(grid: &Grid) -> SearchResult {
    let start = grid.start_index();
    let goals: HashSet<GridIndex> = grid.goal_indices().iter().copied().collect();

    let mut frontier = vec![start];
    let mut discovered = HashSet::from([start]);
    let mut came_from: HashMap<GridIndex, GridIndex> = HashMap::new();
    let mut explored = 0;

    while let Some(current) = frontier.pop() {
        explored += 1;

        if goals.contains(&current) {
            return SearchResult {
                path: reconstruct_path(grid, &came_from, current),
                explored,
            };
        }

        for neighbor in grid.neighbor_indices(&current) {
            if discovered.insert(neighbor) {
                came_from.insert(neighbor, current);
                frontier.push(neighbor);
            }
        }
    }

    SearchResult::no_path(explored)
}
