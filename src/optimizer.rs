//! Route optimizer orchestration.
//!
//! Validates the stops, builds a nearest-neighbor order, improves it with
//! anchored 2-opt and reports before/after distances. The first and last
//! stops keep their positions throughout.

use std::collections::HashSet;

use log::debug;

use crate::config::{CoordinatePolicy, OptimizerConfig};
use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::evaluation::{route_distance, DistanceReport};
use crate::local_search::{two_opt_improve, TwoOptOutcome};
use crate::models::{Route, Stop};

/// Outcome of optimizing one itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Stop IDs in the caller's order.
    pub original_order: Vec<String>,
    /// Stop IDs in optimized order; same set, same first and last entries.
    pub optimized_order: Vec<String>,
    /// Unrounded length of the caller's order in km.
    pub original_distance: f64,
    /// Unrounded length of the optimized order in km.
    pub optimized_distance: f64,
    /// Rounded figures for display.
    pub report: DistanceReport,
    /// 2-opt passes performed.
    pub passes: usize,
    /// `false` if the pass cap stopped 2-opt early.
    pub converged: bool,
}

/// Reorders the interior stops of an itinerary to shorten the trip.
///
/// Stateless apart from its configuration; one optimizer can serve any
/// number of concurrent callers.
///
/// # Examples
///
/// ```
/// use itinerary_route::models::Stop;
/// use itinerary_route::optimizer::RouteOptimizer;
///
/// let stops = vec![
///     Stop::new("paris", "Paris", 2.3522, 48.8566),
///     Stop::new("vienna", "Vienna", 16.3738, 48.2082),
///     Stop::new("strasbourg", "Strasbourg", 7.7521, 48.5734),
///     Stop::new("munich", "Munich", 11.5820, 48.1351),
///     Stop::new("budapest", "Budapest", 19.0402, 47.4979),
/// ];
///
/// let result = RouteOptimizer::default().optimize(&stops).unwrap();
/// assert_eq!(
///     result.optimized_order,
///     vec!["paris", "strasbourg", "munich", "vienna", "budapest"]
/// );
/// assert!(result.report.saved_percent > 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes the visiting order of `stops`.
    ///
    /// # Errors
    ///
    /// - [`RouteError::TooFewStops`] for fewer than two stops.
    /// - [`RouteError::DuplicateStopId`] if two stops share an ID.
    /// - [`RouteError::InvalidCoordinate`] under [`CoordinatePolicy::Validate`]
    ///   when a coordinate is non-finite or out of range.
    pub fn optimize(&self, stops: &[Stop]) -> Result<OptimizationResult> {
        self.validate(stops)?;

        let n = stops.len();
        let distances = DistanceMatrix::from_stops(stops);
        let identity: Vec<usize> = (0..n).collect();
        let original_distance = route_distance(&identity, &distances);
        let max_passes = self.config.pass_limit(n);

        let constructed = nearest_neighbor(&identity, &distances);
        let mut outcome = two_opt_improve(&constructed, &distances, max_passes);
        let mut optimized_distance = route_distance(&outcome.order, &distances);

        // Greedy construction can lose to the caller's order; 2-opt on the
        // caller's order cannot.
        if optimized_distance > original_distance {
            let fallback = two_opt_improve(&identity, &distances, max_passes);
            let fallback_distance = route_distance(&fallback.order, &distances);
            debug!(
                "nearest-neighbor start longer than input ({optimized_distance:.3} km > \
                 {original_distance:.3} km); 2-opt from input gives {fallback_distance:.3} km"
            );
            outcome = fallback;
            optimized_distance = fallback_distance;
        }

        let TwoOptOutcome {
            order,
            passes,
            moves,
            converged,
        } = outcome;

        let route = Route::new(stops.to_vec());
        let optimized = route.reordered(&order).unwrap_or_else(|| route.clone());
        let report = DistanceReport::new(original_distance, optimized_distance);

        debug!(
            "optimized {n} stops: {original_distance:.3} km -> {optimized_distance:.3} km \
             ({passes} passes, {moves} moves, saved {}%)",
            report.saved_percent
        );

        Ok(OptimizationResult {
            original_order: route.ids().into_iter().map(String::from).collect(),
            optimized_order: optimized.ids().into_iter().map(String::from).collect(),
            original_distance,
            optimized_distance,
            report,
            passes,
            converged,
        })
    }

    fn validate(&self, stops: &[Stop]) -> Result<()> {
        if stops.len() < 2 {
            return Err(RouteError::TooFewStops { count: stops.len() });
        }

        let mut seen = HashSet::with_capacity(stops.len());
        for stop in stops {
            if !seen.insert(stop.id()) {
                return Err(RouteError::DuplicateStopId(stop.id().to_string()));
            }
        }

        if self.config.coordinates == CoordinatePolicy::Validate {
            if let Some(stop) = stops.iter().find(|s| !s.coordinate().is_valid()) {
                let c = stop.coordinate();
                return Err(RouteError::InvalidCoordinate {
                    id: stop.id().to_string(),
                    longitude: c.longitude(),
                    latitude: c.latitude(),
                });
            }
        }

        Ok(())
    }
}

/// Optimizes `stops` with the default configuration.
pub fn optimize(stops: &[Stop]) -> Result<OptimizationResult> {
    RouteOptimizer::default().optimize(stops)
}
