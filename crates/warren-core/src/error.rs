//! Generation pipeline errors.

use thiserror::Error;

use crate::config::ConfigError;
use crate::graph::GraphError;

/// Errors surfaced by the generation pipeline.
///
/// Layout oddities (a prune refused, an unreachable room filtered out, a
/// path query with no answer) are data outcomes, not errors; only misuse
/// of the pipeline itself lands here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("partitioning produced no rooms")]
    NoRooms,
}
