use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::Cell;

/// Random draws allowed per grid cell before obstacle placement gives up.
pub const DEFAULT_DRAWS_PER_CELL: usize = 32;

/// Construction parameters of a [GridMap](crate::GridMap).
///
/// `tile_size` and `step_interval` are not used by the engine itself. They travel with the
/// configuration for the renderer and for the host loop that paces [tick](crate::PathExecutor::tick)
/// calls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub tile_size: u32,
    /// Fraction of cells to block, in `[0, 1)`.
    pub obstacle_rate: f64,
    pub seed: u64,
    /// Cell the agent spawns on. Never blocked.
    pub spawn: Cell,
    pub draws_per_cell: usize,
    pub step_interval: Duration,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: 10,
            height: 10,
            tile_size: 60,
            obstacle_rate: 0.2,
            seed: 0,
            spawn: Cell::ORIGIN,
            draws_per_cell: DEFAULT_DRAWS_PER_CELL,
            step_interval: Duration::from_millis(300),
        }
    }
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> GridConfig {
        GridConfig {
            width,
            height,
            ..GridConfig::default()
        }
    }

    pub fn with_obstacle_rate(mut self, obstacle_rate: f64) -> GridConfig {
        self.obstacle_rate = obstacle_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> GridConfig {
        self.seed = seed;
        self
    }

    pub fn with_spawn(mut self, spawn: Cell) -> GridConfig {
        self.spawn = spawn;
        self
    }

    pub fn with_tile_size(mut self, tile_size: u32) -> GridConfig {
        self.tile_size = tile_size;
        self
    }

    pub fn with_draws_per_cell(mut self, draws_per_cell: usize) -> GridConfig {
        self.draws_per_cell = draws_per_cell;
        self
    }

    pub fn with_step_interval(mut self, step_interval: Duration) -> GridConfig {
        self.step_interval = step_interval;
        self
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of cells generation will block: `floor(width * height * obstacle_rate)`.
    pub fn obstacle_count(&self) -> usize {
        (self.cell_count() as f64 * self.obstacle_rate).floor() as usize
    }

    /// Checks the parameters without generating anything.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_dimensions(self.width, self.height)?;
        // Written so that NaN fails as well.
        if !(0.0..1.0).contains(&self.obstacle_rate) {
            return Err(ConfigurationError::ObstacleRate(self.obstacle_rate));
        }
        let in_bounds = self.spawn.x >= 0
            && self.spawn.y >= 0
            && (self.spawn.x as usize) < self.width
            && (self.spawn.y as usize) < self.height;
        if !in_bounds {
            return Err(ConfigurationError::SpawnOutOfBounds {
                spawn: self.spawn,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<(), ConfigurationError> {
    if width == 0 || height == 0 {
        return Err(ConfigurationError::ZeroDimension { width, height });
    }
    let too_large = i32::try_from(width).is_err()
        || i32::try_from(height).is_err()
        || width.checked_mul(height).is_none();
    if too_large {
        return Err(ConfigurationError::TooLarge { width, height });
    }
    Ok(())
}
