//! Tile codes
//!
//! Templates are written in small integer codes. Codes 0-4, 8 and 9 are
//! final tiles; 5, 6, 7 and 10 are markers that stamping resolves with a
//! coin flip.

use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{Display, EnumIter};

/// A resolved, renderable tile
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize_repr,
    Deserialize_repr,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    /// Player start spot
    Spawn = 0,
    /// Solid ground
    Ground = 1,
    /// Alternate solid ground
    AltGround = 2,
    /// Empty space
    #[default]
    Open = 3,
    /// Reserved; drawn like open space for now
    Placeholder = 4,
    Treasure = 8,
    Exit = 9,
}

impl Tile {
    /// Integer code of this tile
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a final tile code; markers and unknown codes give `None`
    pub const fn from_code(code: u8) -> Option<Tile> {
        match code {
            0 => Some(Tile::Spawn),
            1 => Some(Tile::Ground),
            2 => Some(Tile::AltGround),
            3 => Some(Tile::Open),
            4 => Some(Tile::Placeholder),
            8 => Some(Tile::Treasure),
            9 => Some(Tile::Exit),
            _ => None,
        }
    }
}

/// A probabilistic template code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[repr(u8)]
pub enum Marker {
    /// Ground or alternate ground
    GroundOrAlt = 5,
    /// Ground or open space
    GroundOrOpen = 6,
    /// Enemy slot; enemies are not placed, so this is always open space
    EnemySlot = 7,
    /// Open space or treasure
    OpenOrTreasure = 10,
}

impl Marker {
    /// Integer code of this marker
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn from_code(code: u8) -> Option<Marker> {
        match code {
            5 => Some(Marker::GroundOrAlt),
            6 => Some(Marker::GroundOrOpen),
            7 => Some(Marker::EnemySlot),
            10 => Some(Marker::OpenOrTreasure),
            _ => None,
        }
    }

    /// Resolve the marker given the outcome of a coin flip
    pub const fn resolve(self, heads: bool) -> Tile {
        match (self, heads) {
            (Marker::GroundOrAlt, true) => Tile::Ground,
            (Marker::GroundOrAlt, false) => Tile::AltGround,
            (Marker::GroundOrOpen, true) => Tile::Ground,
            (Marker::GroundOrOpen, false) => Tile::Open,
            (Marker::EnemySlot, _) => Tile::Open,
            (Marker::OpenOrTreasure, true) => Tile::Open,
            (Marker::OpenOrTreasure, false) => Tile::Treasure,
        }
    }
}

/// One cell of a room template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCell {
    Fixed(Tile),
    Random(Marker),
}

impl TemplateCell {
    pub const fn from_code(code: u8) -> Option<TemplateCell> {
        if let Some(tile) = Tile::from_code(code) {
            return Some(TemplateCell::Fixed(tile));
        }
        match Marker::from_code(code) {
            Some(marker) => Some(TemplateCell::Random(marker)),
            None => None,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            TemplateCell::Fixed(tile) => tile.code(),
            TemplateCell::Random(marker) => marker.code(),
        }
    }

    pub const fn is_marker(self) -> bool {
        matches!(self, TemplateCell::Random(_))
    }
}
