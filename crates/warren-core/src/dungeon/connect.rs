//! Room connectivity: adjacency graph construction and pruning.
//!
//! Two rooms are adjacent when their rectangles overlap (they share a
//! wall strip) and the overlap is long enough to carve a door with one
//! tile of margin on each side. Pruning then retires the smallest rooms,
//! but only while the adjacency graph stays connected.

use crate::consts::DOOR_CLEARANCE;
use crate::graph::{Graph, GraphError};

use super::room::{RoomArena, RoomId};

/// Build the room adjacency graph by pairwise intersection.
///
/// O(n^2) over the room list, acceptable for room counts bounded by
/// dungeon size over minimum room size. An edge means a door can legally
/// fit on the shared wall.
pub fn build_adjacency(
    arena: &RoomArena,
    rooms: &[RoomId],
    door_size: i32,
) -> Result<Graph<RoomId>, GraphError> {
    let mut graph = Graph::new();
    for &id in rooms {
        graph.add_node(id);
    }

    let fit = door_size + DOOR_CLEARANCE;
    for (i, &a) in rooms.iter().enumerate() {
        for &b in &rooms[i + 1..] {
            let Some(overlap) = arena[a].bounds.intersection(&arena[b].bounds) else {
                continue;
            };
            if overlap.width >= fit || overlap.height >= fit {
                graph.add_edge(a, b)?;
            }
        }
    }
    Ok(graph)
}

/// Retire the smallest rooms while the graph stays connected.
///
/// Candidates are the `ceil(count * fraction)` smallest rooms by area,
/// attempted smallest first. The removal anchor is the first room in draw
/// order that is neither the candidate nor already pruned. Pruning stops
/// at the FIRST refused removal; later candidates are not reconsidered
/// (prefix-stop, not a filter).
///
/// Returns the pruned room ids; the graph is updated in place.
pub fn prune_rooms(
    graph: &mut Graph<RoomId>,
    arena: &RoomArena,
    draw_order: &[RoomId],
    fraction: f64,
) -> Vec<RoomId> {
    if draw_order.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<RoomId> = draw_order.to_vec();
    candidates.sort_by_key(|&id| (arena[id].bounds.area(), id));

    let quota = (draw_order.len() as f64 * fraction).ceil() as usize;
    let mut removed = Vec::new();

    for &target in candidates.iter().take(quota) {
        let anchor = draw_order
            .iter()
            .copied()
            .find(|&id| id != target && graph.contains(id));
        let Some(anchor) = anchor else {
            break;
        };
        if graph.try_remove_node(target, anchor) {
            removed.push(target);
        } else {
            break;
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::room::Room;
    use crate::geom::Rect;

    fn arena_of(rects: &[Rect]) -> (RoomArena, Vec<RoomId>) {
        let mut arena = RoomArena::new();
        let ids = rects.iter().map(|&r| arena.insert(Room::new(r))).collect();
        (arena, ids)
    }

    #[test]
    fn test_adjacency_requires_clearance() {
        // Shared strip is 10 tall: fits a door of 3 (+2 clearance).
        let (arena, ids) = arena_of(&[Rect::new(0, 0, 11, 10), Rect::new(10, 0, 10, 10)]);
        let graph = build_adjacency(&arena, &ids, 3).unwrap();
        assert_eq!(graph.neighbours(ids[0]), Some(&[ids[1]][..]));

        // Same layout but only 4 tiles of shared wall: no edge for door 3.
        let (arena, ids) = arena_of(&[Rect::new(0, 0, 11, 4), Rect::new(10, 0, 10, 4)]);
        let graph = build_adjacency(&arena, &ids, 3).unwrap();
        assert_eq!(graph.neighbours(ids[0]), Some(&[][..]));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_disjoint_rooms_get_no_edge() {
        let (arena, ids) = arena_of(&[Rect::new(0, 0, 10, 10), Rect::new(20, 20, 10, 10)]);
        let graph = build_adjacency(&arena, &ids, 3).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_prune_removes_smallest_first() {
        // A strip of four rooms; the middle two are cut vertices, the ends
        // are leaves. Sizes ascend with draw order.
        let (arena, ids) = arena_of(&[
            Rect::new(0, 0, 9, 10),
            Rect::new(8, 0, 10, 10),
            Rect::new(17, 0, 11, 10),
            Rect::new(27, 0, 12, 10),
        ]);
        let mut graph = build_adjacency(&arena, &ids, 3).unwrap();

        // Quota of 1: only the smallest room (a leaf) goes.
        let removed = prune_rooms(&mut graph, &arena, &ids, 0.25);
        assert_eq!(removed, vec![ids[0]]);
        assert!(!graph.contains(ids[0]));
        assert!(graph.is_connected_from(ids[1]));
    }

    #[test]
    fn test_prune_stops_at_first_refusal() {
        // Star: center room 0 touches three leaves. Center is smallest, so
        // it is the first candidate, its removal would disconnect, and the
        // whole pass stops even though every leaf is individually safe.
        let (arena, ids) = arena_of(&[
            Rect::new(10, 10, 10, 10),
            Rect::new(1, 10, 10, 10),
            Rect::new(19, 10, 11, 10),
            Rect::new(10, 1, 10, 10),
        ]);
        let mut graph = build_adjacency(&arena, &ids, 3).unwrap();
        assert_eq!(graph.edge_count(), 3);

        let removed = prune_rooms(&mut graph, &arena, &ids, 0.99);
        assert!(removed.is_empty());
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_prune_never_disconnects() {
        let (arena, ids) = arena_of(&[
            Rect::new(0, 0, 9, 10),
            Rect::new(8, 0, 10, 10),
            Rect::new(17, 0, 11, 10),
            Rect::new(27, 0, 12, 10),
        ]);
        let mut graph = build_adjacency(&arena, &ids, 3).unwrap();

        prune_rooms(&mut graph, &arena, &ids, 0.99);
        let anchor = graph.nodes()[0];
        assert!(graph.is_connected_from(anchor));
    }
}
