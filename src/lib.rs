//! # tile_pathing
//!
//! Click-to-move pathfinding for tile games. A [GridMap] is generated once from a seeded
//! obstacle rate, [PathFinder] computes shortest 4-directional paths on it with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and a Manhattan heuristic, and a
//! [PathExecutor] walks an agent along a path one cell per tick. Searches between cells on
//! different [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! return immediately instead of flood-filling the grid.
//!
//! The engine is single-threaded and owns no timers: the host loop decides when to tick.
//!
//! ```
//! use tile_pathing::{Cell, GridConfig, Session};
//!
//! let config = GridConfig::new(5, 5).with_obstacle_rate(0.0);
//! let mut session = Session::new(config).unwrap();
//! assert_eq!(session.request_path(Cell::new(4, 4)).unwrap(), 8);
//! while session.tick().is_some() {}
//! assert_eq!(session.agent_cell(), Cell::new(4, 4));
//! assert_eq!(session.move_count(), 8);
//! ```
mod astar;
pub mod cell;
pub mod config;
pub mod error;
pub mod executor;
pub mod grid_map;
pub mod path;
pub mod path_finder;
pub mod session;

pub use cell::Cell;
pub use config::{GridConfig, DEFAULT_DRAWS_PER_CELL};
pub use error::{ConfigurationError, Error, Result};
pub use executor::{ExecutorState, PathExecutor};
pub use grid_map::GridMap;
pub use path::Path;
pub use path_finder::PathFinder;
pub use session::Session;
