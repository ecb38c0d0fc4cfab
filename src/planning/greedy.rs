//! Greedy best-first search.
//!
//! Orders the frontier solely by the heuristic estimate of remaining
//! cost. Fast in open space, but the path it commits to is not
//! necessarily shortest.

use super::{SearchResult, heuristic, reconstruct_path};
use crate::core::GridIndex;
use crate::grid::Grid;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

struct GreedyNode {
    index: GridIndex,
    h: usize,
}

impl Eq for GreedyNode {}

impl PartialEq for GreedyNode {
    fn eq(&self, other: &Self) -> bool {
        self.h == other.h
    }
}

impl Ord for GreedyNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest h.
        other.h.cmp(&self.h)
    }
}

impl PartialOrd for GreedyNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) fn greedy(grid: &Grid) -> SearchResult {
    let start = grid.start_index();
    let goals: HashSet<GridIndex> = grid.goal_indices().iter().copied().collect();

    let mut frontier = BinaryHeap::new();
    let mut discovered = HashSet::from([start]);
    let mut came_from: HashMap<GridIndex, GridIndex> = HashMap::new();
    let mut explored = 0;

    frontier.push(GreedyNode {
        index: start,
        h: heuristic(&start, grid.goal_indices()),
    });

    while let Some(current) = frontier.pop() {
        explored += 1;

        if goals.contains(&current.index) {
            return SearchResult {
                path: reconstruct_path(grid, &came_from, current.index),
                explored,
            };
        }

        for neighbor in grid.neighbor_indices(&current.index) {
            if discovered.insert(neighbor) {
                came_from.insert(neighbor, current.index);
                frontier.push(GreedyNode {
                    index: neighbor,
                    h: heuristic(&neighbor, grid.goal_indices()),
                });
            }
        }
    }

    SearchResult::no_path(explored)
}
