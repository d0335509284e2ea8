//! Ordered stop sequences.

use super::Stop;

/// An ordered sequence of stops; insertion order is the travel order.
///
/// The first and last stops are the itinerary's anchors. A route never
/// changes a stop's identity or coordinates, only its position.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::{Route, Stop};
///
/// let route = Route::new(vec![
///     Stop::new("a", "A", 0.0, 0.0),
///     Stop::new("b", "B", 1.0, 0.0),
///     Stop::new("c", "C", 2.0, 0.0),
/// ]);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.ids(), vec!["a", "b", "c"]);
///
/// let reordered = route.reordered(&[0, 2, 1]).unwrap();
/// assert_eq!(reordered.ids(), vec!["a", "c", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Creates a route visiting `stops` in the given order.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Returns the stops in travel order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop IDs in travel order.
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(Stop::id).collect()
    }

    /// Returns a new route visiting this route's stops in `order`, where each
    /// entry is a position in this route.
    ///
    /// Returns `None` unless `order` is a permutation of `0..len`.
    pub fn reordered(&self, order: &[usize]) -> Option<Route> {
        if !is_permutation(order, self.stops.len()) {
            return None;
        }
        Some(Route::new(
            order.iter().map(|&i| self.stops[i].clone()).collect(),
        ))
    }
}

/// Returns `true` if `order` contains each of `0..n` exactly once.
fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in order {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Route {
        Route::new(vec![
            Stop::new("a", "A", 0.0, 0.0),
            Stop::new("b", "B", 1.0, 1.0),
            Stop::new("c", "C", 2.0, 2.0),
        ])
    }

    #[test]
    fn test_route_empty() {
        let r = Route::default();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(r.ids().is_empty());
    }

    #[test]
    fn test_reordered_keeps_stops() {
        let r = sample();
        let re = r.reordered(&[2, 0, 1]).expect("permutation");
        assert_eq!(re.ids(), vec!["c", "a", "b"]);
        assert_eq!(re.stops()[0].coordinate(), r.stops()[2].coordinate());
    }

    #[test]
    fn test_reordered_rejects_non_permutation() {
        let r = sample();
        assert!(r.reordered(&[0, 0, 1]).is_none());
        assert!(r.reordered(&[0, 1]).is_none());
        assert!(r.reordered(&[0, 1, 3]).is_none());
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[], 0));
        assert!(is_permutation(&[1, 0], 2));
        assert!(!is_permutation(&[1, 1], 2));
    }
}
