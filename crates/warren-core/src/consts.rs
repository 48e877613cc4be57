//! Crate-wide layout constants.

/// Default dungeon width in tiles
pub const DEFAULT_WIDTH: i32 = 60;

/// Default dungeon height in tiles
pub const DEFAULT_HEIGHT: i32 = 40;

/// Smallest supported door span
pub const MIN_DOOR_SIZE: i32 = 2;

/// Largest supported door span
pub const MAX_DOOR_SIZE: i32 = 5;

/// Extra overlap length a shared wall needs beyond the door span itself,
/// one tile of margin on each side of the carved opening.
pub const DOOR_CLEARANCE: i32 = 2;
