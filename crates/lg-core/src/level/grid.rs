//! The stamped level

use serde::Serialize;

use crate::consts::{LEVEL_HEIGHT, LEVEL_WIDTH};

use super::tile::Tile;

/// Receives tiles while a level is drawn, row by row from the top
pub trait TileRenderer {
    fn begin_row(&mut self, _y: usize) {}

    fn draw_tile(&mut self, x: usize, y: usize, tile: Tile);

    fn end_row(&mut self, _y: usize) {}
}

/// A 32x32 grid of resolved tiles.
///
/// Row-major with the origin at the top left: `x` grows to the right and
/// `y` grows downward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LevelGrid {
    width: usize,
    height: usize,
    tiles: [[Tile; LEVEL_WIDTH]; LEVEL_HEIGHT],
}

impl LevelGrid {
    pub(crate) fn filled(tile: Tile) -> Self {
        Self {
            width: LEVEL_WIDTH,
            height: LEVEL_HEIGHT,
            tiles: [[tile; LEVEL_WIDTH]; LEVEL_HEIGHT],
        }
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[y][x] = tile;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.tiles.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Tile code at `(x, y)`
    pub fn code(&self, x: usize, y: usize) -> Option<u8> {
        self.get(x, y).map(Tile::code)
    }

    pub fn rows(&self) -> &[[Tile; LEVEL_WIDTH]; LEVEL_HEIGHT] {
        &self.tiles
    }

    /// The level as raw tile codes, row-major
    pub fn to_codes(&self) -> [[u8; LEVEL_WIDTH]; LEVEL_HEIGHT] {
        self.tiles.map(|row| row.map(Tile::code))
    }

    /// Every tile with its position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &tile)| (x, y, tile))
        })
    }

    /// First tile equal to `tile` in row-major order
    pub fn find(&self, tile: Tile) -> Option<(usize, usize)> {
        self.iter().find(|&(_, _, t)| t == tile).map(|(x, y, _)| (x, y))
    }

    /// Where the player starts
    pub fn spawn_point(&self) -> Option<(usize, usize)> {
        self.find(Tile::Spawn)
    }

    pub fn exit_point(&self) -> Option<(usize, usize)> {
        self.find(Tile::Exit)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.iter().filter(|&(_, _, t)| t == tile).count()
    }

    /// Feed every tile to `renderer`, top row first
    pub fn render<R: TileRenderer + ?Sized>(&self, renderer: &mut R) {
        for (y, row) in self.tiles.iter().enumerate() {
            renderer.begin_row(y);
            for (x, &tile) in row.iter().enumerate() {
                renderer.draw_tile(x, y, tile);
            }
            renderer.end_row(y);
        }
    }
}
