//! A library for running Conway's Game of Life on a bounded grid.
//!
//! Cells outside the grid are permanently dead.
//!
//! The main entry point is [`Life`], which owns the grid and advances it one generation
//! at a time. The building blocks [`Grid`], [`count_live_neighbors`], [`step`] and
//! [`seed`] are also exposed for hosts that want to drive the grid themselves.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod cell;
mod config;
mod error;
mod grid;
mod life;
mod neighbor;
mod rule;
mod seed;
mod step;

pub use cell::CellState;
pub use config::{Config, SeedKind};
pub use error::{ConfigError, Error, IndexOutOfRange, StateError};
pub use grid::Grid;
pub use life::{Life, Phase};
pub use neighbor::{count_live_neighbors, MOORE_OFFSETS};
pub use rule::{successor, NEIGHBORHOOD_SIZE, RULE_NAME};
pub use seed::{seed, SeedPolicy};
pub use step::{step, step_into};
