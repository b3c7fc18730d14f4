//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `pt-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A route or query named an island that is not in the graph.
    #[error("island {0:?} not found in graph")]
    UnknownIsland(String),

    #[error("route {from:?} -> {to:?} must take at least one day")]
    NonPositiveTravelTime { from: String, to: String },

    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
