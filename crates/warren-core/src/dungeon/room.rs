//! Rooms, door records, and the arena that owns them.
//!
//! Graphs key on [`RoomId`] arena handles, never on room geometry: two
//! rooms with identical rectangles are still distinct nodes. The arena is
//! append-only, so a handle stays valid for the life of a generation run
//! even after its room is pruned from the active layout.

use core::ops::{Index, IndexMut};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geom::Rect;

bitflags! {
    /// Room role flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RoomFlags: u8 {
        /// BFS origin of door placement
        const STARTING = 0x01;
        /// Door record carved between two rooms
        const DOOR = 0x02;
    }
}

// Manual serde impl for RoomFlags
impl Serialize for RoomFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoomFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(RoomFlags::from_bits_truncate(bits))
    }
}

/// Arena handle for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

/// A rectangular region of the dungeon: either a room proper or a
/// door-shaped record carved between two rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Covered tiles, walls included
    pub bounds: Rect,
    /// Role flags
    pub flags: RoomFlags,
}

impl Room {
    /// Create an ordinary room
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            flags: RoomFlags::empty(),
        }
    }

    /// Create a door record
    pub fn door(bounds: Rect) -> Self {
        Self {
            bounds,
            flags: RoomFlags::DOOR,
        }
    }

    /// Check if this is the door-placement starting room
    pub fn is_starting(&self) -> bool {
        self.flags.contains(RoomFlags::STARTING)
    }

    /// Check if this is a door record
    pub fn is_door(&self) -> bool {
        self.flags.contains(RoomFlags::DOOR)
    }
}

/// Append-only room storage handing out [`RoomId`] keys
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomArena {
    rooms: Vec<Room>,
}

impl RoomArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a room and return its handle
    pub fn insert(&mut self, room: Room) -> RoomId {
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(room);
        id
    }

    /// Look up a room by handle
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0 as usize)
    }

    /// Number of rooms ever allocated
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over all allocated rooms with their handles
    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (RoomId(i as u32), room))
    }
}

impl Index<RoomId> for RoomArena {
    type Output = Room;

    fn index(&self, id: RoomId) -> &Room {
        &self.rooms[id.0 as usize]
    }
}

impl IndexMut<RoomId> for RoomArena {
    fn index_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0 as usize]
    }
}
