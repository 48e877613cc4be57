//! Door placement over the pruned room graph.
//!
//! A breadth-first walk from a randomly chosen starting room carves
//! exactly one door per newly discovered room and rewires the graph as
//! room-door-room. Only BFS tree edges get doors, so the result is a
//! spanning structure: cycles in the adjacency graph never survive into
//! the door graph, and rooms outside the starting room's component are
//! dropped as unreachable.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::consts::DOOR_CLEARANCE;
use crate::error::GenError;
use crate::geom::Rect;
use crate::graph::Graph;
use crate::rng::GenRng;

use super::room::{Room, RoomArena, RoomFlags, RoomId};

/// Outcome of door placement
#[derive(Debug, Clone)]
pub struct DoorPlacement {
    /// Room-door graph: rooms and doors as nodes, each door linking the
    /// two rooms it was carved between
    pub graph: Graph<RoomId>,
    /// Rooms reached by the walk, starting room first
    pub rooms: Vec<RoomId>,
    /// Carved door records, in discovery order
    pub doors: Vec<RoomId>,
    /// The flagged starting room
    pub start: RoomId,
}

/// Carve doors along a BFS of `adjacency` and build the room-door graph.
///
/// Each discovered room gets exactly one inbound door from its BFS
/// parent; extra adjacencies between already-visited rooms are ignored.
/// For R reachable rooms the result has R - 1 doors and 2 * (R - 1)
/// edges, connected and acyclic by construction.
pub fn place_doors(
    arena: &mut RoomArena,
    adjacency: &Graph<RoomId>,
    door_size: i32,
    rng: &mut GenRng,
) -> Result<DoorPlacement, GenError> {
    let Some(&start) = rng.choose(adjacency.nodes()) else {
        return Err(GenError::NoRooms);
    };
    arena[start].flags |= RoomFlags::STARTING;

    let mut graph = Graph::new();
    graph.add_node(start);

    let mut visited: HashSet<RoomId> = HashSet::new();
    visited.insert(start);

    let mut rooms = vec![start];
    let mut doors = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let neighbours: Vec<RoomId> = adjacency
            .neighbours(current)
            .map(<[RoomId]>::to_vec)
            .unwrap_or_default();

        for next in neighbours {
            if visited.contains(&next) {
                continue;
            }
            let Some(overlap) = arena[current].bounds.intersection(&arena[next].bounds) else {
                continue;
            };
            let Some(door_rect) = carve_door(overlap, door_size, rng) else {
                continue;
            };

            visited.insert(next);
            let door = arena.insert(Room::door(door_rect));
            graph.add_node(door);
            graph.add_node(next);
            graph.add_edge(current, door)?;
            graph.add_edge(door, next)?;

            rooms.push(next);
            doors.push(door);
            queue.push_back(next);
        }
    }

    Ok(DoorPlacement {
        graph,
        rooms,
        doors,
        start,
    })
}

/// Pick a door rectangle inside a wall overlap.
///
/// The door runs `door_size` tiles along the longer overlap axis at a
/// position drawn uniformly within the one-tile clearance margins, and
/// covers the full overlap thickness across. Returns `None` if the
/// overlap cannot fit the door with clearance.
fn carve_door(overlap: Rect, door_size: i32, rng: &mut GenRng) -> Option<Rect> {
    if overlap.height >= overlap.width {
        if overlap.height < door_size + DOOR_CLEARANCE {
            return None;
        }
        let y = rng.range(overlap.y_min() + 1, overlap.y_max() - door_size);
        Some(Rect::new(overlap.x, y, overlap.width, door_size))
    } else {
        if overlap.width < door_size + DOOR_CLEARANCE {
            return None;
        }
        let x = rng.range(overlap.x_min() + 1, overlap.x_max() - door_size);
        Some(Rect::new(x, overlap.y, door_size, overlap.height))
    }
}
