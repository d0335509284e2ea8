//! Dense distance matrix.

use super::haversine_km;
use crate::models::Stop;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from stop coordinates with the haversine metric. Each pair is
/// computed once and mirrored, so `get(i, j)` and `get(j, i)` are
/// bit-identical.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::Stop;
/// use itinerary_route::distance::DistanceMatrix;
///
/// let stops = vec![
///     Stop::new("a", "A", 0.0, 0.0),
///     Stop::new("b", "B", 1.0, 0.0),
///     Stop::new("c", "C", 2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert!((dm.get(0, 1) - 111.195).abs() < 1e-3);
/// assert_eq!(dm.get(1, 2), dm.get(2, 1));
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the great-circle distance matrix (km) for the given stops.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let n = stops.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(stops[i].coordinate(), stops[j].coordinate());
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the position in `candidates` of the candidate nearest to `from`.
    ///
    /// Ties go to the earliest candidate. A NaN distance never beats the
    /// current best, so when every distance is NaN the first candidate wins.
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        let mut best = 0;
        let mut best_d = f64::INFINITY;
        for (pos, &c) in candidates.iter().enumerate() {
            let d = self.get(from, c);
            if d < best_d {
                best = pos;
                best_d = d;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stops() -> Vec<Stop> {
        vec![
            Stop::new("a", "A", 0.0, 0.0),
            Stop::new("b", "B", 0.0, 1.0),
            Stop::new("c", "C", 0.0, 3.0),
        ]
    }

    #[test]
    fn test_from_stops() {
        let dm = DistanceMatrix::from_stops(&sample_stops());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 111.195).abs() < 1e-3);
        assert!((dm.get(0, 2) - 333.585).abs() < 1e-3);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_stops(&sample_stops());
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_stops(&sample_stops());
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(0));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_takes_first() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 4.0, 4.0, 4.0, 0.0, 1.0, 4.0, 1.0, 0.0])
            .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(0));
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some(0));
    }

    #[test]
    fn test_nearest_neighbor_skips_nan() {
        let dm = DistanceMatrix::from_data(
            3,
            vec![0.0, f64::NAN, 7.0, f64::NAN, 0.0, 1.0, 7.0, 1.0, 0.0],
        )
        .expect("valid");
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));

        let all_nan = DistanceMatrix::from_data(2, vec![f64::NAN; 4]).expect("valid");
        assert_eq!(all_nan.nearest_neighbor(0, &[1]), Some(0));
    }
}
