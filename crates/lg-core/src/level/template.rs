//! Room templates
//!
//! Each room class has an 8x8 template. Templates are written as tile codes
//! and decoded at compile time, so an unknown code fails the build.

use crate::consts::ROOM_SIZE;

use super::route::RoomClass;
use super::tile::{TemplateCell, Tile};

/// An 8x8 room layout, indexed `[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomTemplate {
    cells: [[TemplateCell; ROOM_SIZE]; ROOM_SIZE],
}

impl RoomTemplate {
    /// Build a template from tile codes.
    ///
    /// Panics on a code outside 0-10; in a const context that is a
    /// compile error.
    pub(crate) const fn from_codes(codes: [[u8; ROOM_SIZE]; ROOM_SIZE]) -> Self {
        let mut cells = [[TemplateCell::Fixed(Tile::Open); ROOM_SIZE]; ROOM_SIZE];
        let mut y = 0;
        while y < ROOM_SIZE {
            let mut x = 0;
            while x < ROOM_SIZE {
                cells[y][x] = match TemplateCell::from_code(codes[y][x]) {
                    Some(cell) => cell,
                    None => panic!("unknown template tile code"),
                };
                x += 1;
            }
            y += 1;
        }
        Self { cells }
    }

    /// Build a template from tile codes; `None` if any code is outside 0-10
    pub fn try_from_codes(codes: [[u8; ROOM_SIZE]; ROOM_SIZE]) -> Option<Self> {
        if codes.iter().flatten().all(|&c| TemplateCell::from_code(c).is_some()) {
            Some(Self::from_codes(codes))
        } else {
            None
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> TemplateCell {
        self.cells[y][x]
    }

    /// Cells with their local position, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TemplateCell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &cell)| (x, y, cell))
        })
    }

    /// Count cells holding the fixed tile `tile`
    pub fn count_fixed(&self, tile: Tile) -> usize {
        self.iter()
            .filter(|&(_, _, cell)| cell == TemplateCell::Fixed(tile))
            .count()
    }
}

/// Start room: contains the player spawn
pub const START_ROOM: RoomTemplate = RoomTemplate::from_codes([
    [6, 6, 6, 6, 6, 6, 6, 6],
    [1, 3, 8, 3, 3, 3, 3, 1],
    [1, 3, 1, 3, 3, 3, 3, 1],
    [3, 3, 3, 3, 1, 3, 3, 3],
    [3, 3, 3, 1, 3, 3, 3, 3],
    [1, 3, 1, 3, 8, 3, 1, 1],
    [1, 0, 3, 3, 3, 3, 3, 1],
    [1, 1, 1, 3, 3, 1, 1, 6],
]);

/// Journey room: open on all four sides
pub const JOURNEY_ROOM: RoomTemplate = RoomTemplate::from_codes([
    [6, 1, 1, 3, 3, 1, 1, 6],
    [1, 3, 3, 3, 3, 8, 3, 1],
    [1, 3, 1, 1, 1, 5, 3, 1],
    [3, 3, 3, 8, 4, 3, 3, 3],
    [3, 3, 1, 5, 1, 6, 3, 3],
    [1, 3, 3, 3, 3, 3, 3, 1],
    [1, 6, 1, 3, 3, 1, 1, 1],
    [6, 5, 5, 3, 3, 5, 5, 6],
]);

/// End room: journey layout plus the exit
pub const END_ROOM: RoomTemplate = RoomTemplate::from_codes([
    [6, 1, 1, 3, 3, 1, 1, 6],
    [1, 3, 3, 3, 3, 8, 3, 1],
    [1, 3, 1, 1, 1, 5, 3, 1],
    [3, 3, 3, 8, 4, 3, 3, 3],
    [3, 3, 1, 5, 1, 6, 3, 3],
    [1, 3, 3, 3, 3, 3, 9, 1],
    [1, 6, 1, 3, 3, 1, 1, 1],
    [6, 5, 5, 3, 3, 5, 5, 6],
]);

/// Filler for rooms off the route
pub const OFF_ROOM: RoomTemplate = RoomTemplate::from_codes([
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 6, 6, 6, 6, 6, 6, 1],
    [1, 6, 6, 3, 3, 3, 3, 1],
    [6, 3, 3, 3, 4, 3, 3, 6],
    [6, 6, 6, 1, 1, 3, 3, 6],
    [1, 6, 3, 3, 3, 3, 1, 1],
    [1, 5, 5, 10, 10, 1, 5, 1],
    [1, 1, 1, 6, 6, 1, 1, 1],
]);

/// Template for each room class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomTemplateLibrary {
    start: RoomTemplate,
    journey: RoomTemplate,
    end: RoomTemplate,
    off: RoomTemplate,
}

impl RoomTemplateLibrary {
    /// The built-in templates
    pub const fn standard() -> Self {
        Self {
            start: START_ROOM,
            journey: JOURNEY_ROOM,
            end: END_ROOM,
            off: OFF_ROOM,
        }
    }

    pub fn lookup(&self, class: RoomClass) -> &RoomTemplate {
        match class {
            RoomClass::Start => &self.start,
            RoomClass::Journey => &self.journey,
            RoomClass::End => &self.end,
            RoomClass::Off => &self.off,
        }
    }

    /// Replace the template used for `class`
    pub fn with_template(mut self, class: RoomClass, template: RoomTemplate) -> Self {
        let slot = match class {
            RoomClass::Start => &mut self.start,
            RoomClass::Journey => &mut self.journey,
            RoomClass::End => &mut self.end,
            RoomClass::Off => &mut self.off,
        };
        *slot = template;
        self
    }
}

impl Default for RoomTemplateLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::tile::Marker;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_is_total() {
        let library = RoomTemplateLibrary::standard();
        assert_eq!(library.lookup(RoomClass::Start), &START_ROOM);
        assert_eq!(library.lookup(RoomClass::Journey), &JOURNEY_ROOM);
        assert_eq!(library.lookup(RoomClass::End), &END_ROOM);
        assert_eq!(library.lookup(RoomClass::Off), &OFF_ROOM);
    }

    #[test]
    fn test_single_spawn_and_exit() {
        assert_eq!(START_ROOM.count_fixed(Tile::Spawn), 1);
        assert_eq!(END_ROOM.count_fixed(Tile::Exit), 1);
        for template in [JOURNEY_ROOM, END_ROOM, OFF_ROOM] {
            assert_eq!(template.count_fixed(Tile::Spawn), 0);
        }
        for template in [START_ROOM, JOURNEY_ROOM, OFF_ROOM] {
            assert_eq!(template.count_fixed(Tile::Exit), 0);
        }
    }

    #[test]
    fn test_end_room_differs_from_journey_only_by_exit() {
        let diffs: Vec<_> = JOURNEY_ROOM
            .iter()
            .zip(END_ROOM.iter())
            .filter(|(a, b)| a != b)
            .map(|(_, (x, y, cell))| (x, y, cell))
            .collect();
        assert_eq!(diffs, vec![(6, 5, TemplateCell::Fixed(Tile::Exit))]);
    }

    #[test]
    fn test_templates_use_markers() {
        let library = RoomTemplateLibrary::standard();
        for class in RoomClass::iter() {
            assert!(library.lookup(class).iter().any(|(_, _, c)| c.is_marker()));
        }
        assert!(OFF_ROOM
            .iter()
            .any(|(_, _, c)| c == TemplateCell::Random(Marker::OpenOrTreasure)));
    }

    #[test]
    fn test_with_template() {
        let solid = RoomTemplate::from_codes([[1; ROOM_SIZE]; ROOM_SIZE]);
        let library = RoomTemplateLibrary::standard().with_template(RoomClass::Off, solid);
        assert_eq!(library.lookup(RoomClass::Off), &solid);
        assert_eq!(library.lookup(RoomClass::Start), &START_ROOM);
    }

    #[test]
    fn test_try_from_codes_rejects_unknown() {
        let mut codes = [[3; ROOM_SIZE]; ROOM_SIZE];
        assert!(RoomTemplate::try_from_codes(codes).is_some());
        codes[2][5] = 11;
        assert!(RoomTemplate::try_from_codes(codes).is_none());
    }

    #[test]
    fn test_cell_indexing_is_row_major() {
        assert_eq!(START_ROOM.cell(1, 6), TemplateCell::Fixed(Tile::Spawn));
        assert_eq!(END_ROOM.cell(6, 5), TemplateCell::Fixed(Tile::Exit));
    }
}
