//! Template stamping
//!
//! Copies each room's template into the level, resolving markers with one
//! coin flip per marker cell.

use crate::consts::ROOM_SIZE;
use crate::rng::LevelRng;

use super::grid::LevelGrid;
use super::route::RouteGrid;
use super::template::RoomTemplateLibrary;
use super::tile::{TemplateCell, Tile};

/// Turn a template cell into a final tile
pub fn resolve_cell(cell: TemplateCell, rng: &mut LevelRng) -> Tile {
    match cell {
        TemplateCell::Fixed(tile) => tile,
        TemplateCell::Random(marker) => marker.resolve(rng.coin_flip()),
    }
}

/// Build the full level from a classified room grid
pub fn stamp_rooms(
    route: &RouteGrid,
    library: &RoomTemplateLibrary,
    rng: &mut LevelRng,
) -> LevelGrid {
    let mut grid = LevelGrid::filled(Tile::Open);

    for (room, class) in route.iter() {
        let template = library.lookup(class);
        let (origin_x, origin_y) = (room.column * ROOM_SIZE, room.row * ROOM_SIZE);
        for (x, y, cell) in template.iter() {
            grid.set(origin_x + x, origin_y + y, resolve_cell(cell, rng));
        }
    }

    grid
}
