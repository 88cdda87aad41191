use log::info;

use crate::config::GridConfig;
use crate::error::{Error, Result};
use crate::executor::{ExecutorState, PathExecutor};
use crate::grid_map::GridMap;
use crate::path_finder::PathFinder;
use crate::Cell;

/// One agent on one generated grid: turns goal cells into paths and paths into moves.
///
/// This is the glue a click-to-move scene needs. The host translates pointer positions into
/// goal cells, calls [request_path](Self::request_path), and calls [tick](Self::tick) once per
/// [step_interval](GridConfig::step_interval) while the agent [is_moving](Self::is_moving).
#[derive(Clone, Debug)]
pub struct Session {
    config: GridConfig,
    grid: GridMap,
    finder: PathFinder,
    executor: PathExecutor,
}

impl Session {
    pub fn new(config: GridConfig) -> Result<Session> {
        let grid = GridMap::generate(&config)?;
        let executor = PathExecutor::new(grid.spawn());
        Ok(Session {
            config,
            grid,
            finder: PathFinder::new(),
            executor,
        })
    }

    /// Searches a path from the agent's cell to `goal` and starts following it. Returns the
    /// number of steps queued, which is 0 when the goal is unreachable, blocked or already
    /// reached. Fails with [Error::Busy] while the agent is moving.
    pub fn request_path(&mut self, goal: Cell) -> Result<usize> {
        if self.executor.is_moving() {
            return Err(Error::Busy);
        }
        let path = self.finder.find(&self.grid, self.executor.agent_cell(), goal);
        let steps = path.len();
        self.executor.begin(path)?;
        Ok(steps)
    }

    /// Like [request_path](Self::request_path), but abandons the current path if there is one.
    /// The agent continues from the cell it currently occupies. An unreachable goal stops it.
    pub fn redirect(&mut self, goal: Cell) -> usize {
        let path = self.finder.find(&self.grid, self.executor.agent_cell(), goal);
        let steps = path.len();
        self.executor.replace(path);
        steps
    }

    pub fn tick(&mut self) -> Option<Cell> {
        self.executor.tick()
    }

    /// Regenerates the grid with `seed`, puts the agent back on the spawn cell and resets the
    /// move counter. On error the current game is left untouched.
    pub fn new_game(&mut self, seed: u64) -> Result<()> {
        let config = self.config.clone().with_seed(seed);
        let grid = GridMap::generate(&config)?;
        info!("Starting new game with seed {}", seed);
        self.executor.new_game(grid.spawn());
        self.grid = grid;
        self.config = config;
        Ok(())
    }

    pub fn agent_cell(&self) -> Cell {
        self.executor.agent_cell()
    }

    pub fn move_count(&self) -> u64 {
        self.executor.move_count()
    }

    pub fn state(&self) -> ExecutorState {
        self.executor.state()
    }

    pub fn is_moving(&self) -> bool {
        self.executor.is_moving()
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn executor(&self) -> &PathExecutor {
        &self.executor
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}
