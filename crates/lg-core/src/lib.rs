//! lg-core: room-template level generator
//!
//! A level is a 4x4 grid of 8x8 rooms. Generation walks a solution path from
//! a random room in the top row down to the bottom row, classifies every
//! room as start, journey, end or off-route, then stamps each room's
//! template into a 32x32 tile grid, resolving probabilistic tiles with a
//! seeded RNG.
//!
//! The crate does no rendering; callers read the `LevelGrid` or pass a
//! `TileRenderer` to `LevelGrid::render`.

pub mod config;
pub mod level;

mod consts;
mod error;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use error::{ConfigError, GenerationError};
pub use level::{GeneratedLevel, LevelGenerator, LevelGrid, generate_level};
pub use rng::LevelRng;
