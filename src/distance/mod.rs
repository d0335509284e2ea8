//! Distances between stops.
//!
//! Provides the haversine great-circle metric and a dense distance matrix
//! computed once per route.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
