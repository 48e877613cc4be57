//! Generation configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DOOR_SIZE, MIN_DOOR_SIZE};

/// Configuration errors detected before generation starts
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("dungeon size {width}x{height} cannot fit a room of size {min}")]
    DimensionsTooSmall { width: i32, height: i32, min: i32 },

    #[error("minimum room size range [{lo}, {hi}) is invalid")]
    BadRoomSizeRange { lo: i32, hi: i32 },

    #[error("door size {0} is outside the supported range 2..=5")]
    BadDoorSize(i32),

    #[error("prune fraction {0} must be in [0, 1)")]
    BadPruneFraction(f64),
}

/// Everything one generation run consumes, immutable for its duration.
///
/// `min_room` is a half-open range: each split attempt draws a fresh
/// minimum size from `[min_room.0, min_room.1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Seed for the deterministic RNG
    pub seed: u64,
    /// Dungeon width in tiles
    pub width: i32,
    /// Dungeon height in tiles
    pub height: i32,
    /// Half-open range the per-split minimum room size is drawn from
    pub min_room: (i32, i32),
    /// Door span in tiles
    pub door_size: i32,
    /// Fraction of the smallest rooms offered up for pruning
    pub prune_fraction: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_room: (8, 12),
            door_size: 3,
            prune_fraction: 0.1,
        }
    }
}

impl GenerationConfig {
    /// Validate the configuration before a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = self.min_room;
        if lo < 3 || hi <= lo {
            return Err(ConfigError::BadRoomSizeRange { lo, hi });
        }
        if self.width < hi || self.height < hi {
            return Err(ConfigError::DimensionsTooSmall {
                width: self.width,
                height: self.height,
                min: hi,
            });
        }
        if !(MIN_DOOR_SIZE..=MAX_DOOR_SIZE).contains(&self.door_size) {
            return Err(ConfigError::BadDoorSize(self.door_size));
        }
        if !(0.0..1.0).contains(&self.prune_fraction) {
            return Err(ConfigError::BadPruneFraction(self.prune_fraction));
        }
        Ok(())
    }
}
