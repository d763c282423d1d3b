//! Level generation
//!
//! Route walk over the room grid, room templates, and stamping into the
//! final tile grid.

mod generator;
mod grid;
mod route;
mod stamp;
mod template;
mod tile;

pub use generator::{GeneratedLevel, LevelGenerator, generate_level};
pub use grid::{LevelGrid, TileRenderer};
pub use route::{
    RoomClass, RoomCoord, RouteGrid, Step, StepSource, WalkPolicy, WalkWeights, WeightedWalk,
    generate_route,
};
pub use stamp::{resolve_cell, stamp_rooms};
pub use template::{
    END_ROOM, JOURNEY_ROOM, OFF_ROOM, RoomTemplate, RoomTemplateLibrary, START_ROOM,
};
pub use tile::{Marker, TemplateCell, Tile};
