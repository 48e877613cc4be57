//! warren-core: procedural dungeon layout generation and grid pathfinding
//!
//! This crate contains all generation and search logic with no I/O
//! dependencies. It is designed to be pure and testable: `generate` is a
//! deterministic function of its configuration (same seed, same dungeon),
//! and pathfinding queries are read-only against the finished layout.
//!
//! The pipeline runs partition -> connect -> prune -> doors -> rasterize ->
//! navgraph, each stage replacing rather than patching shared state. See
//! [`dungeon::generate`] for the entry point and [`dungeon::Dungeon`] for
//! the finished artifact.

pub mod config;
pub mod dungeon;
pub mod error;
pub mod geom;
pub mod graph;
pub mod path;
pub mod pqueue;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GenRng;
