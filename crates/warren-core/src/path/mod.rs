//! Pathfinding: navigation graph construction and point-to-point search.

pub mod astar;
pub mod navgraph;

pub use astar::{PathStrategy, find_path, find_path_with, greedy_path, nearest_node, path_cost};
pub use navgraph::{CellPos, build_nav_graph};
