use std::collections::VecDeque;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::Path;
use crate::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExecutorState {
    /// No path, new paths are accepted.
    #[default]
    Idle,
    /// Following a non-empty path.
    Moving,
}

/// Walks an agent along a [Path], one cell per [tick](Self::tick).
///
/// The executor owns no timer. The host decides how often to tick, typically once per
/// [step_interval](crate::GridConfig::step_interval) while [is_moving](Self::is_moving) holds.
#[derive(Clone, Debug)]
pub struct PathExecutor {
    state: ExecutorState,
    remaining: VecDeque<Cell>,
    agent_cell: Cell,
    move_count: u64,
    path_length: usize,
}

impl PathExecutor {
    pub fn new(spawn: Cell) -> PathExecutor {
        PathExecutor {
            state: ExecutorState::Idle,
            remaining: VecDeque::new(),
            agent_cell: spawn,
            move_count: 0,
            path_length: 0,
        }
    }

    /// Starts following `path`. Fails with [Error::Busy] while a path is being followed; use
    /// [replace](Self::replace) to redirect instead. An empty path leaves the executor idle.
    pub fn begin(&mut self, path: Path) -> Result<()> {
        if self.state == ExecutorState::Moving {
            debug!("Rejecting new path while moving towards {:?}", self.remaining.back());
            return Err(Error::Busy);
        }
        self.start(path);
        Ok(())
    }

    /// Drops whatever is left of the current path and follows `path` instead. An empty path
    /// stops the agent where it stands.
    pub fn replace(&mut self, path: Path) {
        if self.state == ExecutorState::Moving {
            debug!(
                "Replacing path with {} cells left at {}",
                self.remaining.len(),
                self.agent_cell
            );
        }
        self.remaining.clear();
        self.state = ExecutorState::Idle;
        self.start(path);
    }

    fn start(&mut self, path: Path) {
        if path.is_empty() {
            return;
        }
        self.path_length = path.len();
        self.remaining = path.into_cells().into();
        self.state = ExecutorState::Moving;
        debug!(
            "Following path of {} steps from {}",
            self.path_length, self.agent_cell
        );
    }

    /// Advances the agent by one cell and returns its new position, or [None] when idle.
    pub fn tick(&mut self) -> Option<Cell> {
        if self.state != ExecutorState::Moving {
            return None;
        }
        let next = self.remaining.pop_front()?;
        self.agent_cell = next;
        self.move_count += 1;
        if self.remaining.is_empty() {
            self.state = ExecutorState::Idle;
            debug!("Arrived at {} after {} moves", next, self.move_count);
        }
        Some(next)
    }

    /// Stops the agent where it stands, keeping the move counter.
    pub fn cancel(&mut self) {
        self.remaining.clear();
        self.state = ExecutorState::Idle;
    }

    /// Starts over on `spawn`. This is the only operation that resets the move counter.
    pub fn new_game(&mut self, spawn: Cell) {
        *self = PathExecutor::new(spawn);
    }

    pub fn state(&self) -> ExecutorState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state == ExecutorState::Moving
    }

    pub fn agent_cell(&self) -> Cell {
        self.agent_cell
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Length of the most recently accepted path.
    pub fn path_length(&self) -> usize {
        self.path_length
    }

    /// Cells not yet stepped onto, in order.
    pub fn remaining(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.remaining.iter()
    }
}
