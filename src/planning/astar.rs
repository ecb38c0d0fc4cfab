//! A* search.
//!
//! Frontier ordered by f = g + h; ties on f prefer the larger g, which
//! finishes promising partial paths before branching out. Decrease-key
//! is lazy: a cheaper route to a state pushes a fresh frontier entry
//! and the stale one is skipped when popped. The explored set does not
//! block re-expansion, so a state reached again with a lower cost is
//! expanded again.

use super::{SearchResult, heuristic, reconstruct_path};
use crate::core::GridIndex;
use crate::grid::Grid;
use log::trace;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

struct AstarNode {
    index: GridIndex,
    /// Accumulated move count from the start.
    g: usize,
    /// g plus the heuristic estimate of remaining moves.
    f: usize,
}

impl Eq for AstarNode {}

impl PartialEq for AstarNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.g == other.g
    }
}

impl Ord for AstarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on f for a min-heap; on equal f the deeper node
        // (larger g) wins.
        other.f.cmp(&self.f).then(self.g.cmp(&other.g))
    }
}

impl PartialOrd for AstarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub(crate) fn astar(grid: &Grid) -> SearchResult {
    let start = grid.start_index();
    let goals: HashSet<GridIndex> = grid.goal_indices().iter().copied().collect();

    let mut frontier = BinaryHeap::new();
    let mut best_g: HashMap<GridIndex, usize> = HashMap::new();
    let mut explored: HashSet<GridIndex> = HashSet::new();
    let mut came_from: HashMap<GridIndex, GridIndex> = HashMap::new();

    best_g.insert(start, 0);
    frontier.push(AstarNode {
        index: start,
        g: 0,
        f: heuristic(&start, grid.goal_indices()),
    });

    while let Some(current) = frontier.pop() {
        // Stale entry: a cheaper route to this state was already
        // processed.
        if best_g.get(&current.index).is_some_and(|&g| current.g > g) {
            continue;
        }

        explored.insert(current.index);
        trace!("astar expand {} g={} f={}", current.index, current.g, current.f);

        if goals.contains(&current.index) {
            return SearchResult {
                path: reconstruct_path(grid, &came_from, current.index),
                explored: explored.len(),
            };
        }

        for neighbor in grid.neighbor_indices(&current.index) {
            let tentative_g = current.g + 1;
            if tentative_g < best_g.get(&neighbor).copied().unwrap_or(usize::MAX) {
                best_g.insert(neighbor, tentative_g);
                came_from.insert(neighbor, current.index);
                frontier.push(AstarNode {
                    index: neighbor,
                    g: tentative_g,
                    f: tentative_g + heuristic(&neighbor, grid.goal_indices()),
                });
            }
        }
    }

    SearchResult::no_path(explored.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;
    use crate::grid::test_support::grid_from_cells;

    #[test]
    fn test_tie_break_prefers_deeper_node() {
        let mut heap = BinaryHeap::new();
        heap.push(AstarNode {
            index: GridIndex::new(&[0]),
            g: 1,
            f: 6,
        });
        heap.push(AstarNode {
            index: GridIndex::new(&[1]),
            g: 4,
            f: 6,
        });
        heap.push(AstarNode {
            index: GridIndex::new(&[2]),
            g: 0,
            f: 7,
        });
        let first = heap.pop().unwrap();
        assert_eq!(first.g, 4);
        assert_eq!(heap.pop().unwrap().g, 1);
        assert_eq!(heap.pop().unwrap().f, 7);
    }

    #[test]
    fn test_astar_routes_around_wall() {
        // 5x3 grid with a wall bar across the middle column except the
        // top row.
        //
        //   S . . . .        (row 0 of axis 1)
        //   . . % . .
        //   . . % . G
        let mut cells = vec![CellState::Free; 15];
        let at = |a: usize, b: usize| a * 3 + b;
        cells[at(0, 0)] = CellState::Start;
        cells[at(2, 1)] = CellState::Wall;
        cells[at(2, 2)] = CellState::Wall;
        cells[at(4, 2)] = CellState::Goal;
        let grid = grid_from_cells(
            &[5, 3],
            cells,
            GridIndex::new(&[0, 0]),
            vec![GridIndex::new(&[4, 2])],
        );

        let result = astar(&grid);
        assert!(result.found());
        // Straight-line distance is 6 moves and remains achievable by
        // crossing column 2 in row 0.
        assert_eq!(result.path.len(), 7);
        for pair in result.path.windows(2) {
            let a = grid.angle_to_index(&pair[0]).unwrap();
            let b = grid.angle_to_index(&pair[1]).unwrap();
            assert_eq!(a.manhattan(&b), 1);
            assert_ne!(grid.state_at(&b), CellState::Wall);
        }
    }

    #[test]
    fn test_astar_explores_fewer_states_than_bfs_in_open_space() {
        let mut cells = vec![CellState::Free; 49];
        cells[0] = CellState::Start;
        cells[48] = CellState::Goal;
        let grid = grid_from_cells(
            &[7, 7],
            cells,
            GridIndex::new(&[0, 0]),
            vec![GridIndex::new(&[6, 6])],
        );
        let astar_result = astar(&grid);
        let bfs_result = super::super::bfs(&grid);
        assert_eq!(astar_result.path.len(), bfs_result.path.len());
        assert!(astar_result.explored <= bfs_result.explored);
    }
}
