//! Tile grid and rasterization of the final room/door set.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::geom::Rect;

use super::room::{RoomArena, RoomId};

/// Tile type, with the integer code it rasterizes to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(i8)]
pub enum Tile {
    #[default]
    Empty = -1,
    Floor = 0,
    Wall = 1,
    /// Door spanning horizontally, carved in a horizontal wall strip
    DoorH = 2,
    /// Door spanning vertically, carved in a vertical wall strip
    DoorV = 3,
}

impl Tile {
    /// Integer code of this tile
    pub const fn code(&self) -> i8 {
        *self as i8
    }

    /// Check if this is a wall
    pub const fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Check if this is a door
    pub const fn is_door(&self) -> bool {
        matches!(self, Tile::DoorH | Tile::DoorV)
    }

    /// Check if walkers may stand here
    pub const fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor | Tile::DoorH | Tile::DoorV)
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::DoorH | Tile::DoorV => '+',
        }
    }
}

/// A 2D tile buffer, row-major, read-only once generation finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Allocate a grid filled with [`Tile::Empty`]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; (width * height) as usize],
        }
    }

    /// Grid width in tiles
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in tiles
    pub fn height(&self) -> i32 {
        self.height
    }

    /// All tiles, row-major
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Tile at a coordinate, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.idx(x, y).map(|i| self.tiles[i])
    }

    /// Write a tile; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = self.idx(x, y) {
            self.tiles[i] = tile;
        }
    }

    /// Write `tile` over a rectangle's full footprint
    pub fn fill_rect(&mut self, rect: Rect, tile: Tile) {
        for y in rect.y_min()..rect.y_max() {
            for x in rect.x_min()..rect.x_max() {
                self.set(x, y, tile);
            }
        }
    }

    /// Write `tile` over a rectangle's one-tile border ring only
    pub fn fill_rect_outline(&mut self, rect: Rect, tile: Tile) {
        for y in rect.y_min()..rect.y_max() {
            for x in rect.x_min()..rect.x_max() {
                let on_ring = x == rect.x_min()
                    || x == rect.x_max() - 1
                    || y == rect.y_min()
                    || y == rect.y_max() - 1;
                if on_ring {
                    self.set(x, y, tile);
                }
            }
        }
    }

    /// Integer codes, one row per inner vec
    pub fn codes(&self) -> Vec<Vec<i8>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.tiles[(y * self.width + x) as usize].code())
                    .collect()
            })
            .collect()
    }
}

/// Paint rooms and doors into a fresh grid.
///
/// Room interiors become floor inside a wall ring; shared walls are
/// simply painted by both rooms. Doors overwrite whatever is under their
/// footprint, so a door always punctures the wall it sits on.
pub fn rasterize(
    arena: &RoomArena,
    rooms: &[RoomId],
    doors: &[RoomId],
    width: i32,
    height: i32,
) -> TileGrid {
    let mut grid = TileGrid::new(width, height);

    for &id in rooms {
        let bounds = arena[id].bounds;
        grid.fill_rect(bounds, Tile::Floor);
        grid.fill_rect_outline(bounds, Tile::Wall);
    }

    for &id in doors {
        let bounds = arena[id].bounds;
        let tile = if bounds.width >= bounds.height {
            Tile::DoorH
        } else {
            Tile::DoorV
        };
        grid.fill_rect(bounds, tile);
    }

    grid
}
