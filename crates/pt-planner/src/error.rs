use pt_core::CoreError;
use pt_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// A trip plan contains a leg with no direct route, meaning it was built
    /// against a different graph.
    #[error("trip plan leg {from} -> {to} has no route in the graph")]
    MissingRoute { from: String, to: String },

    #[error("canoe capacity must be positive, got {0}")]
    InvalidCapacity(u32),

    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;
