//! Level dimensions and generation limits

/// Tiles along one side of a room
pub const ROOM_SIZE: usize = 8;

/// Rooms along one side of the room grid
pub const ROOMS_ACROSS: usize = 4;

/// Level dimensions in tiles (4 rooms * 8 tiles per room)
pub const LEVEL_WIDTH: usize = ROOMS_ACROSS * ROOM_SIZE;
pub const LEVEL_HEIGHT: usize = ROOMS_ACROSS * ROOM_SIZE;

/// Walk steps allowed before a route attempt is abandoned
pub const MAX_WALK_STEPS: u32 = 64;

/// Route attempts made by `generate_level` before giving up
pub const MAX_ATTEMPTS: u32 = 3;
