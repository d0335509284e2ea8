//! Open-path route length and distance savings.

use crate::distance::{haversine_km, DistanceMatrix};
use crate::models::Stop;

/// Total length (km) of travelling through `stops` in order.
///
/// Sums the haversine distance of every consecutive pair; there is no
/// return leg. Routes with fewer than two stops have length zero.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::Stop;
/// use itinerary_route::evaluation::total_distance;
///
/// let stops = vec![
///     Stop::new("a", "A", 0.0, 0.0),
///     Stop::new("b", "B", 1.0, 0.0),
///     Stop::new("c", "C", 2.0, 0.0),
/// ];
/// assert!((total_distance(&stops) - 222.39).abs() < 0.01);
/// assert_eq!(total_distance(&stops[..1]), 0.0);
/// ```
pub fn total_distance(stops: &[Stop]) -> f64 {
    stops
        .windows(2)
        .map(|w| haversine_km(w[0].coordinate(), w[1].coordinate()))
        .sum()
}

/// Total length of visiting matrix locations in `order`, without a return leg.
pub fn route_distance(order: &[usize], distances: &DistanceMatrix) -> f64 {
    order.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

/// Rounded before/after distance figures for one optimization.
///
/// All values are whole kilometers (or whole percent), rounded to the
/// nearest integer with halves away from zero. A NaN distance reports as 0.
///
/// # Examples
///
/// ```
/// use itinerary_route::evaluation::DistanceReport;
///
/// let report = DistanceReport::new(425.6, 333.5);
/// assert_eq!(report.original_km, 426);
/// assert_eq!(report.optimized_km, 334);
/// assert_eq!(report.saved_km, 92);
/// assert_eq!(report.saved_percent, 22);
///
/// // Nothing to save on a zero-length route.
/// assert_eq!(DistanceReport::new(0.0, 0.0).saved_percent, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceReport {
    /// Length of the route in caller order.
    pub original_km: i64,
    /// Length of the optimized route.
    pub optimized_km: i64,
    /// `original - optimized`, rounded after subtracting.
    pub saved_km: i64,
    /// Relative saving; 0 when the original route has zero length.
    pub saved_percent: i64,
}

impl DistanceReport {
    /// Builds a report from unrounded distances in kilometers.
    pub fn new(original: f64, optimized: f64) -> Self {
        let saved_percent = if original > 0.0 {
            round_whole((1.0 - optimized / original) * 100.0)
        } else {
            0
        };
        Self {
            original_km: round_whole(original),
            optimized_km: round_whole(optimized),
            saved_km: round_whole(original - optimized),
            saved_percent,
        }
    }
}

// `as` saturates and maps NaN to 0.
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}
