//! Breadth-first search.
//!
//! First-in-first-out frontier over unit-cost moves, so the first goal
//! dequeued closes a shortest path.

use super::{SearchResult, reconstruct_path};
use crate::core::GridIndex;
use crate::grid::Grid;
use std::collections::{HashMap, HashSet, VecDeque};

pub(crate) fn bfs(grid: &Grid) -> SearchResult {
    let start = grid.start_index();
    let goals: HashSet<GridIndex> = grid.goal_indices().iter().copied().collect();

    let mut frontier = VecDeque::new();
    let mut discovered = HashSet::new();
    let mut came_from: HashMap<GridIndex, GridIndex> = HashMap::new();
    let mut explored = 0;

    discovered.insert(start);
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
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
                frontier.push_back(neighbor);
            }
        }
    }

    SearchResult::no_path(explored)
}
