//! Error types for grid construction and path following.

use thiserror::Error;

use crate::Cell;

/// Invalid grid parameters. Fatal for session setup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("grid of {width}x{height} cells cannot be addressed with i32 coordinates")]
    TooLarge { width: usize, height: usize },

    #[error("obstacle rate must lie in [0, 1), got {0}")]
    ObstacleRate(f64),

    #[error("spawn cell {spawn} lies outside the {width}x{height} grid")]
    SpawnOutOfBounds {
        spawn: Cell,
        width: usize,
        height: usize,
    },

    #[error("cell {0} lies outside the grid")]
    CellOutOfBounds(Cell),

    #[error("spawn cell {0} must not be blocked")]
    BlockedSpawn(Cell),

    #[error("placed {placed} of {requested} obstacles before exhausting {draws} random draws")]
    PlacementExhausted {
        placed: usize,
        requested: usize,
        draws: usize,
    },
}

/// Crate error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A new path was offered while the agent is still following one.
    #[error("agent is still following a path")]
    Busy,
}

pub type Result<T> = std::result::Result<T, Error>;
