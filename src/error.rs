//! Error type for route optimization.

use thiserror::Error as ThisError;

/// Reasons an optimization request is rejected.
///
/// Every variant is an input problem; the computation itself cannot fail.
#[derive(Debug, ThisError)]
pub enum RouteError {
    #[error("at least 2 stops required for optimization (got {count})")]
    TooFewStops { count: usize },
    #[error("duplicate stop id: {0}")]
    DuplicateStopId(String),
    #[error("stop {id} has invalid coordinates [{longitude}, {latitude}]")]
    InvalidCoordinate {
        id: String,
        longitude: f64,
        latitude: f64,
    },
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
