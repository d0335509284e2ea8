//! Great-circle distance.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d = 2R · atan2(√a, √(1−a))
//! ```
//!
//! where φ is latitude, λ is longitude and R = 6371 km.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// Non-finite input yields NaN; nothing is validated here.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::Coordinate;
/// use itinerary_route::distance::haversine_km;
///
/// let paris = Coordinate::new(2.3522, 48.8566);
/// let london = Coordinate::new(-0.1276, 51.5072);
/// let d = haversine_km(paris, london);
/// assert!((d - 343.5).abs() < 1.0);
/// assert_eq!(haversine_km(paris, paris), 0.0);
/// ```
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude().to_radians();
    let lat2 = b.latitude().to_radians();
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lng = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `h` just past 1 for near-antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
