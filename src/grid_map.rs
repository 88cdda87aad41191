use core::fmt;

use itertools::iproduct;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::config::{validate_dimensions, GridConfig};
use crate::error::{ConfigurationError, Result};
use crate::Cell;

/// [GridMap] is an immutable rectangle of walkable ([false]) and blocked ([true]) cells stored
/// in row-major order. Connected components of the walkable cells are computed once at
/// construction using a [UnionFind] structure, which lets searches between disconnected
/// partitions return immediately instead of flood-filling.
#[derive(Clone, Debug)]
pub struct GridMap {
    width: usize,
    height: usize,
    spawn: Cell,
    blocked: Vec<bool>,
    components: UnionFind<usize>,
}

impl GridMap {
    /// Generates a grid by rejection sampling `floor(width * height * obstacle_rate)` distinct
    /// obstacle cells from a [StdRng] seeded with `config.seed`. The spawn cell is never drawn.
    /// The same configuration always yields the same obstacles.
    pub fn generate(config: &GridConfig) -> Result<GridMap> {
        config.validate()?;
        let (width, height) = (config.width, config.height);
        let requested = config.obstacle_count();
        let budget = config.draws_per_cell.saturating_mul(config.cell_count());
        let mut blocked = vec![false; config.cell_count()];
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut placed = 0;
        let mut draws = 0;
        while placed < requested {
            if draws >= budget {
                return Err(ConfigurationError::PlacementExhausted {
                    placed,
                    requested,
                    draws,
                }
                .into());
            }
            draws += 1;
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            let ix = y * width + x;
            // Redraws do not count towards the placed obstacles.
            if Cell::new(x as i32, y as i32) == config.spawn || blocked[ix] {
                continue;
            }
            blocked[ix] = true;
            placed += 1;
        }
        info!(
            "Generated {}x{} grid with {} obstacles in {} draws (seed {})",
            width, height, placed, draws, config.seed
        );
        Ok(GridMap::assemble(width, height, config.spawn, blocked))
    }

    /// Builds a grid from an explicit set of blocked cells. The spawn is [Cell::ORIGIN], which
    /// must not be among them.
    pub fn from_blocked<I>(width: usize, height: usize, blocked_cells: I) -> Result<GridMap>
    where
        I: IntoIterator<Item = Cell>,
    {
        validate_dimensions(width, height)?;
        let mut blocked = vec![false; width * height];
        for cell in blocked_cells {
            if cell == Cell::ORIGIN {
                return Err(ConfigurationError::BlockedSpawn(cell).into());
            }
            let ix = index_of(width, height, cell)
                .ok_or(ConfigurationError::CellOutOfBounds(cell))?;
            blocked[ix] = true;
        }
        Ok(GridMap::assemble(width, height, Cell::ORIGIN, blocked))
    }

    fn assemble(width: usize, height: usize, spawn: Cell, blocked: Vec<bool>) -> GridMap {
        let mut grid = GridMap {
            width,
            height,
            spawn,
            blocked,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        grid
    }

    /// Links every walkable cell to its walkable right and lower neighbours.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let ix = y * self.width + x;
            if self.blocked[ix] {
                continue;
            }
            if x + 1 < self.width && !self.blocked[ix + 1] {
                self.components.union(ix, ix + 1);
            }
            if y + 1 < self.height && !self.blocked[ix + self.width] {
                self.components.union(ix, ix + self.width);
            }
        }
        debug!("Computed connected components of {}x{} grid", self.width, self.height);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn spawn(&self) -> Cell {
        self.spawn
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        index_of(self.width, self.height, cell).is_some()
    }

    /// Out-of-bounds cells read as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        match index_of(self.width, self.height, cell) {
            Some(ix) => self.blocked[ix],
            None => true,
        }
    }

    pub fn is_walkable(&self, cell: Cell) -> bool {
        !self.is_blocked(cell)
    }

    /// Blocked cells in row-major order.
    pub fn blocked_cells(&self) -> Vec<Cell> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.blocked[y * self.width + x])
            .map(|(y, x)| Cell::new(x as i32, y as i32))
            .collect()
    }

    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Walkable 4-neighbours of `cell`, in the order up, right, down, left.
    pub fn walkable_neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 4]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.is_walkable(*n))
            .collect()
    }

    /// Retrieves the component id of a cell, or [None] if it is out of bounds.
    pub fn component(&self, cell: &Cell) -> Option<usize> {
        index_of(self.width, self.height, *cell).map(|ix| self.components.find(ix))
    }

    /// Checks if both cells are walkable and lie on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.is_blocked(*start) || self.is_blocked(*goal) {
            return false;
        }
        match (
            index_of(self.width, self.height, *start),
            index_of(self.width, self.height, *goal),
        ) {
            (Some(s), Some(g)) => self.components.equiv(s, g),
            _ => false,
        }
    }
}

fn index_of(width: usize, height: usize, cell: Cell) -> Option<usize> {
    if cell.x < 0 || cell.y < 0 {
        return None;
    }
    let (x, y) = (cell.x as usize, cell.y as usize);
    (x < width && y < height).then(|| y * width + x)
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.blocked.chunks(self.width) {
            let line: String = row.iter().map(|&b| if b { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn generation_is_deterministic() {
        let config = GridConfig::new(12, 9).with_obstacle_rate(0.3).with_seed(42);
        let a = GridMap::generate(&config).unwrap();
        let b = GridMap::generate(&config).unwrap();
        assert_eq!(a.blocked_cells(), b.blocked_cells());
        assert_eq!(a.obstacle_count(), config.obstacle_count());
    }

    #[test]
    fn seeds_change_layout() {
        let config = GridConfig::new(20, 20).with_obstacle_rate(0.3);
        let a = GridMap::generate(&config.clone().with_seed(1)).unwrap();
        let b = GridMap::generate(&config.with_seed(2)).unwrap();
        assert_ne!(a.blocked_cells(), b.blocked_cells());
    }

    #[test]
    fn spawn_stays_walkable() {
        for seed in 0..50 {
            let spawn = Cell::new(2, 1);
            let config = GridConfig::new(4, 4)
                .with_obstacle_rate(0.9)
                .with_seed(seed)
                .with_spawn(spawn);
            let grid = GridMap::generate(&config).unwrap();
            assert!(grid.is_walkable(spawn));
            assert_eq!(grid.obstacle_count(), 14);
        }
    }

    #[test]
    fn exhausted_draws_fail() {
        let config = GridConfig::new(5, 5)
            .with_obstacle_rate(0.5)
            .with_draws_per_cell(0);
        let err = GridMap::generate(&config).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(ConfigurationError::PlacementExhausted {
                placed: 0,
                requested: 12,
                draws: 0
            })
        );
    }

    #[test]
    fn from_blocked_rejects_origin_and_out_of_bounds() {
        assert!(matches!(
            GridMap::from_blocked(3, 3, [Cell::ORIGIN]),
            Err(Error::Configuration(ConfigurationError::BlockedSpawn(_)))
        ));
        assert!(matches!(
            GridMap::from_blocked(3, 3, [Cell::new(3, 0)]),
            Err(Error::Configuration(ConfigurationError::CellOutOfBounds(_)))
        ));
    }

    #[test]
    fn bounds_read_as_blocked() {
        let grid = GridMap::from_blocked(2, 2, Vec::<Cell>::new()).unwrap();
        assert!(grid.is_blocked(Cell::new(-1, 0)));
        assert!(grid.is_blocked(Cell::new(0, 2)));
        assert!(grid.is_walkable(Cell::new(1, 1)));
    }

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // |.#.|
        // |.#.|
        let grid = GridMap::from_blocked(3, 2, [Cell::new(1, 0), Cell::new(1, 1)]).unwrap();
        assert!(grid.reachable(&Cell::new(0, 0), &Cell::new(0, 1)));
        assert!(!grid.reachable(&Cell::new(0, 0), &Cell::new(2, 0)));
        assert!(!grid.reachable(&Cell::new(0, 0), &Cell::new(1, 0)));
        assert_eq!(
            grid.component(&Cell::new(2, 0)),
            grid.component(&Cell::new(2, 1))
        );
    }

    #[test]
    fn neighbours_skip_blocked_and_bounds() {
        let grid = GridMap::from_blocked(3, 3, [Cell::new(1, 0)]).unwrap();
        let n = grid.walkable_neighbours(&Cell::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[Cell::new(2, 1), Cell::new(1, 2), Cell::new(0, 1)]
        );
        let corner = grid.walkable_neighbours(&Cell::ORIGIN);
        assert_eq!(corner.as_slice(), &[Cell::new(0, 1)]);
    }

    #[test]
    fn display_marks_obstacles() {
        let grid = GridMap::from_blocked(3, 2, [Cell::new(1, 0)]).unwrap();
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }
}
