//! Dungeon generation pipeline.
//!
//! Stages run synchronously to completion, each replacing rather than
//! patching shared state: partition the bounds into rooms, derive the
//! room adjacency graph, prune the smallest rooms while the graph stays
//! connected, re-derive adjacency for the survivors, carve doors along a
//! BFS spanning walk, rasterize rooms and doors into the tile grid, and
//! build the navigation graph over it. An optional stage callback lets a
//! UI animate the boundaries; nothing suspends.

pub mod connect;
pub mod doors;
pub mod partition;
pub mod raster;
pub mod room;

pub use connect::{build_adjacency, prune_rooms};
pub use doors::{DoorPlacement, place_doors};
pub use partition::partition;
pub use raster::{Tile, TileGrid, rasterize};
pub use room::{Room, RoomArena, RoomFlags, RoomId};

use strum::{Display, EnumIter};

use crate::config::GenerationConfig;
use crate::error::GenError;
use crate::geom::Rect;
use crate::graph::Graph;
use crate::path::{CellPos, PathStrategy, build_nav_graph, find_path, greedy_path, nearest_node};
use crate::rng::GenRng;

/// Pipeline stage boundaries reported to the generation observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Stage {
    Partition,
    Connect,
    Prune,
    Doors,
    Rasterize,
    NavGraph,
}

/// A finished dungeon: the generation output plus the structures
/// pathfinding queries run against.
///
/// Queries are read-only; many callers may search concurrently as long as
/// nobody regenerates underneath them.
#[derive(Debug, Clone)]
pub struct Dungeon {
    /// Configuration the run consumed
    pub config: GenerationConfig,
    /// Owner of every room and door record ever allocated
    pub arena: RoomArena,
    /// Surviving rooms, starting room first
    pub rooms: Vec<RoomId>,
    /// Carved doors in discovery order
    pub doors: Vec<RoomId>,
    /// BFS origin of door placement
    pub start_room: RoomId,
    /// Room-door spanning graph
    pub graph: Graph<RoomId>,
    /// Rasterized tile grid
    pub grid: TileGrid,
    /// Walkable-cell navigation graph
    pub nav: Graph<CellPos>,
}

impl Dungeon {
    /// Rectangles of the surviving rooms
    pub fn room_rects(&self) -> Vec<Rect> {
        self.rooms.iter().map(|&id| self.arena[id].bounds).collect()
    }

    /// Rectangles of the carved doors
    pub fn door_rects(&self) -> Vec<Rect> {
        self.doors.iter().map(|&id| self.arena[id].bounds).collect()
    }

    /// Answer a point-to-point path query.
    ///
    /// Endpoints snap to the nearest walkable cell; the result is an
    /// ordered waypoint list, empty when no path exists.
    pub fn find_path(
        &self,
        start: (f64, f64),
        goal: (f64, f64),
        strategy: PathStrategy,
    ) -> Vec<CellPos> {
        let snapped_start = nearest_node(&self.nav, start.0, start.1);
        let snapped_goal = nearest_node(&self.nav, goal.0, goal.1);
        let (Some(from), Some(to)) = (snapped_start, snapped_goal) else {
            return Vec::new();
        };
        match strategy {
            PathStrategy::AStar => find_path(&self.nav, from, to),
            PathStrategy::Greedy => greedy_path(&self.nav, from, to),
        }
    }
}

/// Generate a dungeon from a validated configuration
pub fn generate(config: &GenerationConfig) -> Result<Dungeon, GenError> {
    generate_with(config, |_| {})
}

/// Generate a dungeon, reporting each completed stage to `on_stage`
pub fn generate_with(
    config: &GenerationConfig,
    mut on_stage: impl FnMut(Stage),
) -> Result<Dungeon, GenError> {
    config.validate()?;
    let mut rng = GenRng::new(config.seed);

    let bounds = Rect::new(0, 0, config.width, config.height);
    let rects = partition(bounds, config.min_room, &mut rng);
    let mut arena = RoomArena::new();
    let draw_order: Vec<RoomId> = rects.into_iter().map(|r| arena.insert(Room::new(r))).collect();
    if draw_order.is_empty() {
        return Err(GenError::NoRooms);
    }
    on_stage(Stage::Partition);

    let mut graph = build_adjacency(&arena, &draw_order, config.door_size)?;
    on_stage(Stage::Connect);

    let removed = prune_rooms(&mut graph, &arena, &draw_order, config.prune_fraction);
    let survivors: Vec<RoomId> = draw_order
        .iter()
        .copied()
        .filter(|id| !removed.contains(id))
        .collect();
    on_stage(Stage::Prune);

    let adjacency = build_adjacency(&arena, &survivors, config.door_size)?;
    let placement = place_doors(&mut arena, &adjacency, config.door_size, &mut rng)?;
    on_stage(Stage::Doors);

    let grid = rasterize(
        &arena,
        &placement.rooms,
        &placement.doors,
        config.width,
        config.height,
    );
    on_stage(Stage::Rasterize);

    let nav = build_nav_graph(&grid)?;
    on_stage(Stage::NavGraph);

    Ok(Dungeon {
        config: config.clone(),
        arena,
        rooms: placement.rooms,
        doors: placement.doors,
        start_room: placement.start,
        graph: placement.graph,
        grid,
        nav,
    })
}
