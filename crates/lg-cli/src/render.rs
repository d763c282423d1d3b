//! Text rendering of generated levels

use lg_core::level::{RoomClass, RouteGrid, Tile, TileRenderer};

/// Character used for each tile
pub fn tile_glyph(tile: Tile) -> char {
    match tile {
        Tile::Spawn => '@',
        Tile::Ground => '#',
        Tile::AltGround => '%',
        Tile::Open | Tile::Placeholder => '.',
        Tile::Treasure => '$',
        Tile::Exit => '>',
    }
}

pub fn room_glyph(class: RoomClass) -> char {
    match class {
        RoomClass::Start => 'S',
        RoomClass::Journey => 'J',
        RoomClass::End => 'E',
        RoomClass::Off => '.',
    }
}

/// Collects a level into lines of glyphs
#[derive(Debug, Default)]
pub struct AsciiRenderer {
    out: String,
}

impl AsciiRenderer {
    pub fn into_string(self) -> String {
        self.out
    }
}

impl TileRenderer for AsciiRenderer {
    fn draw_tile(&mut self, _x: usize, _y: usize, tile: Tile) {
        self.out.push(tile_glyph(tile));
    }

    fn end_row(&mut self, _y: usize) {
        self.out.push('\n');
    }
}

/// The room classification grid, one line per room row
pub fn route_to_string(route: &RouteGrid) -> String {
    route
        .rows()
        .iter()
        .map(|row| row.iter().map(|&class| room_glyph(class)).collect::<String>() + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_core::{LEVEL_HEIGHT, LEVEL_WIDTH, LevelGenerator, LevelRng};

    #[test]
    fn test_level_renders_as_square_block() {
        let level = LevelGenerator::default()
            .generate(&mut LevelRng::new(3))
            .unwrap();
        let mut renderer = AsciiRenderer::default();
        level.grid.render(&mut renderer);
        let text = renderer.into_string();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), LEVEL_HEIGHT);
        assert!(lines.iter().all(|l| l.chars().count() == LEVEL_WIDTH));
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('>').count(), 1);
    }

    #[test]
    fn test_route_rendering() {
        let level = LevelGenerator::default()
            .generate(&mut LevelRng::new(3))
            .unwrap();
        let text = route_to_string(&level.route);
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.matches('S').count(), 1);
        assert_eq!(text.matches('E').count(), 1);
        assert!(text.lines().next().unwrap().contains('S'));
        assert!(text.lines().last().unwrap().contains('E'));
    }
}
