//! Anchored 2-opt improvement for open paths.
//!
//! # Algorithm
//!
//! For each pair of interior positions `i < j`, compare the two edges that
//! reversing `r[i..=j]` would remove against the two it would create:
//!
//! ```text
//! removed = d(r[i-1], r[i]) + d(r[j], r[j+1])
//! created = d(r[i-1], r[j]) + d(r[i], r[j+1])
//! ```
//!
//! If `created < removed`, reverse the segment in place and keep scanning
//! from the new state. Repeat full passes until one makes no move
//! (first-improvement strategy). Positions `0` and `n-1` are never touched.
//!
//! # Complexity
//!
//! O(n²) per pass. The number of passes is capped; see [`TwoOptOutcome`].
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use log::{trace, warn};

use crate::distance::DistanceMatrix;

/// Result of a 2-opt run.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoOptOutcome {
    /// Improved sequence of matrix indices.
    pub order: Vec<usize>,
    /// Full passes performed, including the final pass with no move.
    pub passes: usize,
    /// Segment reversals accepted.
    pub moves: usize,
    /// `false` if the pass cap stopped the search before a local optimum.
    pub converged: bool,
}

/// Default pass cap for a route of `n` stops: `max(n², 1)`.
pub fn default_max_passes(n: usize) -> usize {
    n.saturating_mul(n).max(1)
}

/// Applies 2-opt to `order`, holding its first and last entries fixed.
///
/// At most `max_passes` full passes run; if the cap is reached first, the
/// best order found so far is returned with `converged == false`. The
/// result is never longer than the input. Sequences of three or fewer
/// entries are returned unchanged.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::Stop;
/// use itinerary_route::distance::DistanceMatrix;
/// use itinerary_route::local_search::two_opt_improve;
///
/// // Corners of a square, visited with both diagonals.
/// let stops = vec![
///     Stop::new("a", "A", 0.0, 0.0),
///     Stop::new("c", "C", 1.0, 1.0),
///     Stop::new("b", "B", 1.0, 0.0),
///     Stop::new("d", "D", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
///
/// let outcome = two_opt_improve(&[0, 1, 2, 3], &dm, 16);
/// assert_eq!(outcome.order, vec![0, 2, 1, 3]);
/// assert!(outcome.converged);
/// ```
pub fn two_opt_improve(
    order: &[usize],
    distances: &DistanceMatrix,
    max_passes: usize,
) -> TwoOptOutcome {
    let n = order.len();
    let mut current = order.to_vec();
    if n <= 3 {
        return TwoOptOutcome {
            order: current,
            passes: 0,
            moves: 0,
            converged: true,
        };
    }

    let mut passes = 0;
    let mut moves = 0;
    let mut improved = true;

    while improved {
        if passes >= max_passes {
            warn!(
                "2-opt stopped after {passes} passes without converging ({n} stops, {moves} moves)"
            );
            return TwoOptOutcome {
                order: current,
                passes,
                moves,
                converged: false,
            };
        }

        improved = false;
        passes += 1;
        let pass_moves = moves;

        for i in 1..n - 2 {
            for j in i + 1..n - 1 {
                if reversal_gain(&current, distances, i, j) > 0.0 {
                    current[i..=j].reverse();
                    moves += 1;
                    improved = true;
                }
            }
        }

        trace!("2-opt pass {passes}: {} moves", moves - pass_moves);
    }

    TwoOptOutcome {
        order: current,
        passes,
        moves,
        converged: true,
    }
}

/// Distance saved by reversing `route[i..=j]`; positive means shorter.
///
/// Written as a strict comparison of the removed and created edge pairs, so
/// ties and NaN both report no gain.
fn reversal_gain(route: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let (prev_i, next_j) = (route[i - 1], route[j + 1]);

    let removed = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let created = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    if created < removed {
        removed - created
    } else {
        0.0
    }
}
