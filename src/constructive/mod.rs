//! Constructive heuristics for building an initial stop order.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor walk between fixed anchors, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
