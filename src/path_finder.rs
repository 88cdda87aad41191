use log::{debug, warn};

use crate::astar::astar;
use crate::grid_map::GridMap;
use crate::path::Path;
use crate::Cell;

/// Cost of a single move to a 4-neighbour.
const STEP_COST: i32 = 1;

/// Shortest paths on a [GridMap] with A* over the 4-neighbourhood.
///
/// The heuristic is the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry),
/// which is consistent on a uniform-cost 4-grid, so returned paths are shortest. Neighbours are
/// expanded up, right, down, left and ties on the estimated total cost go to the node discovered
/// first, so the same query always produces the same path.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> PathFinder {
        PathFinder
    }

    /// Computes a path from `start` to `goal`. The result excludes `start` and ends on `goal`.
    ///
    /// Returns an empty [Path] if `start == goal`, if either cell is blocked or out of bounds,
    /// or if the two cells lie on different connected components.
    pub fn find(&self, grid: &GridMap, start: Cell, goal: Cell) -> Path {
        if start == goal {
            return Path::new();
        }
        if grid.is_blocked(start) || grid.is_blocked(goal) {
            debug!("Ignoring request from {} to blocked or outside cell {}", start, goal);
            return Path::new();
        }
        // Check if start and goal are on the same connected component.
        if !grid.reachable(&start, &goal) {
            debug!("{} is not reachable from {}", goal, start);
            return Path::new();
        }
        let result = astar(
            &start,
            |node| {
                grid.walkable_neighbours(node)
                    .into_iter()
                    .map(|n| (n, STEP_COST))
            },
            |node| node.manhattan_distance(&goal),
            |node| *node == goal,
        );
        match result {
            Some((cells, cost)) => {
                debug!("Found path of cost {} from {} to {}", cost, start, goal);
                // The search result starts on `start`, where the agent already stands.
                Path::from(cells.into_iter().skip(1).collect::<Vec<Cell>>())
            }
            None => {
                warn!(
                    "Reachable goal {} could not be pathed to from {}, are the components correct?",
                    goal, start
                );
                Path::new()
            }
        }
    }

    /// Number of steps on a shortest path, [None] if there is none. Equal cells give `Some(0)`.
    pub fn path_length(&self, grid: &GridMap, start: Cell, goal: Cell) -> Option<usize> {
        if start == goal {
            return grid.is_walkable(start).then_some(0);
        }
        let path = self.find(grid, start, goal);
        (!path.is_empty()).then(|| path.len())
    }
}
