//! Route length evaluation and before/after reporting.

mod metrics;

pub use metrics::{route_distance, total_distance, DistanceReport};
