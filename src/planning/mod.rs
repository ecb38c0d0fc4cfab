//! Graph search over the configuration grid.
//!
//! Four interchangeable algorithms share the same grid contract and
//! unit-cost moves (one granularity step along one axis):
//!
//! - **BFS**: first-in-first-out frontier, shortest path guaranteed
//! - **DFS**: last-in-first-out frontier, some path, not necessarily
//!   shortest
//! - **Greedy best-first**: frontier ordered by heuristic alone
//! - **A\***: frontier ordered by f = g + h with lazy decrease-key
//!
//! Every algorithm returns the path as configurations (start and goal
//! inclusive) plus the number of distinct states expanded. An empty
//! path means no goal was reachable, which callers must treat as a
//! result, not an error.

mod astar;
mod bfs;
mod dfs;
mod greedy;

use crate::core::{Configuration, GridIndex};
use crate::grid::Grid;
use log::debug;
use std::collections::HashMap;

pub(crate) use astar::astar;
pub(crate) use bfs::bfs;
pub(crate) use dfs::dfs;
pub(crate) use greedy::greedy;

/// Available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMethod {
    Bfs,
    Dfs,
    Greedy,
    Astar,
}

impl SearchMethod {
    /// Look up a method by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bfs" => Some(Self::Bfs),
            "dfs" => Some(Self::Dfs),
            "greedy" => Some(Self::Greedy),
            "astar" => Some(Self::Astar),
            _ => None,
        }
    }

    /// Wire name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Greedy => "greedy",
            Self::Astar => "astar",
        }
    }
}

/// Outcome of one search invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Configurations from start to goal inclusive; empty when no goal
    /// was reached before the frontier emptied.
    pub path: Vec<Configuration>,
    /// Number of distinct states removed from the frontier for
    /// expansion (not the number ever enqueued).
    pub explored: usize,
}

impl SearchResult {
    pub(crate) fn no_path(explored: usize) -> Self {
        Self {
            path: Vec::new(),
            explored,
        }
    }

    /// Whether a goal was reached.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Run the named algorithm over the grid.
///
/// An unrecognized name yields an empty path with zero explored states
/// rather than an error; this permissive behavior is part of the
/// search entry-point contract.
pub fn search(grid: &Grid, method_name: &str) -> SearchResult {
    match SearchMethod::from_name(method_name) {
        Some(method) => run(grid, method),
        None => {
            debug!("unknown search method {method_name:?}");
            SearchResult::no_path(0)
        }
    }
}

/// Run one algorithm over the grid.
pub fn run(grid: &Grid, method: SearchMethod) -> SearchResult {
    let result = match method {
        SearchMethod::Bfs => bfs(grid),
        SearchMethod::Dfs => dfs(grid),
        SearchMethod::Greedy => greedy(grid),
        SearchMethod::Astar => astar(grid),
    };
    debug!(
        "{}: {} ({} states explored)",
        method.name(),
        if result.found() {
            format!("path of {} configurations", result.path.len())
        } else {
            "no path".to_string()
        },
        result.explored
    );
    result
}

/// Estimated remaining move count: the smallest Manhattan distance in
/// index space to any goal.
///
/// A single move changes one axis index by one, so no move can shrink
/// this estimate by more than one; the heuristic never overestimates
/// the true remaining cost, which is what lets A* return shortest
/// paths.
pub(crate) fn heuristic(index: &GridIndex, goals: &[GridIndex]) -> usize {
    goals
        .iter()
        .map(|g| index.manhattan(g))
        .min()
        .unwrap_or(0)
}

/// Follow parent links from the terminal state back to the start, then
/// reverse into a start-to-goal configuration sequence.
pub(crate) fn reconstruct_path(
    grid: &Grid,
    came_from: &HashMap<GridIndex, GridIndex>,
    terminal: GridIndex,
) -> Vec<Configuration> {
    let mut indices = vec![terminal];
    let mut current = terminal;
    while let Some(&parent) = came_from.get(&current) {
        indices.push(parent);
        current = parent;
    }
    indices.reverse();
    indices.iter().map(|i| grid.index_to_angle(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;
    use crate::grid::test_support::grid_from_cells;

    /// 1D corridor: start at 0, goal at the far end.
    fn corridor(len: usize) -> Grid {
        let mut cells = vec![CellState::Free; len];
        cells[0] = CellState::Start;
        cells[len - 1] = CellState::Goal;
        grid_from_cells(
            &[len],
            cells,
            GridIndex::new(&[0]),
            vec![GridIndex::new(&[len - 1])],
        )
    }

    /// 3x3 open room, start in one corner, goal in the opposite one.
    fn open_room() -> Grid {
        let mut cells = vec![CellState::Free; 9];
        cells[0] = CellState::Start;
        cells[8] = CellState::Goal;
        grid_from_cells(
            &[3, 3],
            cells,
            GridIndex::new(&[0, 0]),
            vec![GridIndex::new(&[2, 2])],
        )
    }

    /// 3x3 room whose goal is sealed off by walls.
    fn sealed_room() -> Grid {
        let mut cells = vec![CellState::Free; 9];
        cells[0] = CellState::Start;
        // Goal at (2, 2); walls at (1, 2) and (2, 1) seal the corner.
        cells[2 * 3 + 2] = CellState::Goal;
        cells[1 * 3 + 2] = CellState::Wall;
        cells[2 * 3 + 1] = CellState::Wall;
        grid_from_cells(
            &[3, 3],
            cells,
            GridIndex::new(&[0, 0]),
            vec![GridIndex::new(&[2, 2])],
        )
    }

    #[test]
    fn test_method_names_round_trip() {
        for method in [
            SearchMethod::Bfs,
            SearchMethod::Dfs,
            SearchMethod::Greedy,
            SearchMethod::Astar,
        ] {
            assert_eq!(SearchMethod::from_name(method.name()), Some(method));
        }
        assert_eq!(SearchMethod::from_name("dijkstra"), None);
    }

    #[test]
    fn test_unknown_method_is_permissive() {
        let result = search(&corridor(5), "simulated-annealing");
        assert!(result.path.is_empty());
        assert_eq!(result.explored, 0);
    }

    #[test]
    fn test_every_method_solves_the_corridor() {
        let grid = corridor(6);
        for name in ["bfs", "dfs", "greedy", "astar"] {
            let result = search(&grid, name);
            assert_eq!(result.path.len(), 6, "{name} should walk the corridor");
            assert_eq!(result.path[0], grid.start());
            assert_eq!(*result.path.last().unwrap(), grid.goals()[0]);
            assert!(result.explored >= 1);
        }
    }

    #[test]
    fn test_shortest_methods_agree_in_open_room() {
        let grid = open_room();
        let bfs_len = search(&grid, "bfs").path.len();
        let astar_len = search(&grid, "astar").path.len();
        assert_eq!(bfs_len, 5); // 4 moves across the diagonal L
        assert_eq!(astar_len, bfs_len);

        // DFS and greedy must still produce a valid path of adjacent,
        // non-wall cells.
        for name in ["dfs", "greedy"] {
            let result = search(&grid, name);
            assert!(result.found(), "{name} should find a path");
            for pair in result.path.windows(2) {
                let a = grid.angle_to_index(&pair[0]).unwrap();
                let b = grid.angle_to_index(&pair[1]).unwrap();
                assert_eq!(a.manhattan(&b), 1, "{name} made a non-adjacent move");
                assert_ne!(grid.state_at(&b), CellState::Wall);
            }
        }
    }

    #[test]
    fn test_sealed_goal_exhausts_reachable_cells() {
        let grid = sealed_room();
        // 9 cells minus 2 walls minus the unreachable goal = 6.
        for name in ["bfs", "astar"] {
            let result = search(&grid, name);
            assert!(result.path.is_empty(), "{name} found a phantom path");
            assert_eq!(result.explored, 6, "{name} explored count");
        }
    }

    #[test]
    fn test_start_is_goal() {
        let mut cells = vec![CellState::Free; 4];
        cells[1] = CellState::Start;
        let grid = grid_from_cells(
            &[4],
            cells,
            GridIndex::new(&[1]),
            vec![GridIndex::new(&[1])],
        );
        for name in ["bfs", "dfs", "greedy", "astar"] {
            let result = search(&grid, name);
            assert_eq!(result.path.len(), 1, "{name}");
            assert_eq!(result.explored, 1, "{name}");
        }
    }

    #[test]
    fn test_heuristic_min_over_goals() {
        let goals = [GridIndex::new(&[0, 5]), GridIndex::new(&[3, 1])];
        assert_eq!(heuristic(&GridIndex::new(&[2, 2]), &goals), 2);
        assert_eq!(heuristic(&GridIndex::new(&[0, 4]), &goals), 1);
        assert_eq!(heuristic(&GridIndex::new(&[0, 0]), &[]), 0);
    }
}
