//! Domain model types for itinerary optimization.
//!
//! A [`Stop`] is a named point on the map, a [`Route`] is an ordered
//! sequence of stops whose first and last entries are fixed anchors.

mod route;
mod stop;

pub use route::Route;
pub use stop::{Coordinate, Stop};
