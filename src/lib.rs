//! # itinerary-route
//!
//! Stop-order optimization for trip itineraries: reorders the interior stops
//! of a route to shorten total great-circle travel, keeping the first and
//! last stops fixed (open-path TSP).
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Stop, Route)
//! - [`distance`] — Haversine distance and distance matrix
//! - [`evaluation`] — Route length and before/after reporting
//! - [`constructive`] — Nearest-neighbor construction between fixed anchors
//! - [`local_search`] — Anchored 2-opt
//! - [`optimizer`] — Orchestration: validate, construct, improve, report
//! - [`api`] — JSON request/response contract
//!
//! ## Features
//!
//! - `ffi` — C ABI taking and returning JSON strings
//! - `wasm` — `wasm-bindgen` export for JavaScript callers

pub mod api;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod optimizer;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, RouteError};
pub use optimizer::{optimize, OptimizationResult, RouteOptimizer};
