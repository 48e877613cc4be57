//! Navigation graph derived from the rasterized tile grid.

use serde::{Deserialize, Serialize};

use crate::dungeon::TileGrid;
use crate::graph::{Graph, GraphError};

/// A walkable grid cell, the navigation graph's node type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    /// Create a cell position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another cell
    pub fn distance(&self, other: CellPos) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Build the walkable-cell graph for a finished grid.
///
/// Every floor or door tile becomes a node. Cardinal neighbours connect
/// when both cells are walkable. A diagonal connects only when BOTH
/// flanking cardinal cells are walkable too, so no path ever cuts
/// through a wall corner. Each undirected edge is inserted exactly once
/// (east and south cardinals, the two eastward diagonals).
pub fn build_nav_graph(grid: &TileGrid) -> Result<Graph<CellPos>, GraphError> {
    let mut graph = Graph::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if walkable(grid, x, y) {
                graph.add_node(CellPos::new(x, y));
            }
        }
    }

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !walkable(grid, x, y) {
                continue;
            }
            let here = CellPos::new(x, y);
            let east = walkable(grid, x + 1, y);
            let south = walkable(grid, x, y + 1);
            let north = walkable(grid, x, y - 1);

            if east {
                graph.add_edge(here, CellPos::new(x + 1, y))?;
            }
            if south {
                graph.add_edge(here, CellPos::new(x, y + 1))?;
            }
            if east && south && walkable(grid, x + 1, y + 1) {
                graph.add_edge(here, CellPos::new(x + 1, y + 1))?;
            }
            if east && north && walkable(grid, x + 1, y - 1) {
                graph.add_edge(here, CellPos::new(x + 1, y - 1))?;
            }
        }
    }

    Ok(graph)
}

fn walkable(grid: &TileGrid, x: i32, y: i32) -> bool {
    grid.get(x, y).is_some_and(|t| t.is_walkable())
}
