//! Coordinate and stop types.

use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// Serialized as a `[longitude, latitude]` pair, matching the GeoJSON
/// convention used by mapping providers.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::Coordinate;
///
/// let paris = Coordinate::new(2.3522, 48.8566);
/// assert_eq!(paris.longitude(), 2.3522);
/// assert_eq!(paris.latitude(), 48.8566);
/// assert!(paris.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude (in that order).
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns `true` if both components are finite and within
    /// longitude [-180, 180] and latitude [-90, 90].
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.longitude, c.latitude]
    }
}

/// A stop on an itinerary.
///
/// The `id` is opaque and assigned by the caller; `name` is carried for
/// display only and never read by the optimizer.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::Stop;
///
/// let stop = Stop::new("lyon", "Lyon", 4.8357, 45.7640);
/// assert_eq!(stop.id(), "lyon");
/// assert_eq!(stop.coordinate().latitude(), 45.7640);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(rename = "coordinates")]
    coordinate: Coordinate,
}

impl Stop {
    /// Creates a stop at the given longitude and latitude.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        longitude: f64,
        latitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate: Coordinate::new(longitude, latitude),
        }
    }

    /// Caller-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of this stop.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
