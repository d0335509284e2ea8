//! Local search operators for improving a stop order.
//!
//! - [`two_opt`] — Segment reversal between fixed anchors

mod two_opt;

pub use two_opt::{default_max_passes, two_opt_improve, TwoOptOutcome};
