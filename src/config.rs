//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::local_search::default_max_passes;

/// How stop coordinates are checked before optimizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoordinatePolicy {
    /// Reject non-finite or out-of-range coordinates up front.
    #[default]
    Validate,
    /// Accept anything. NaN distances never win a comparison, so affected
    /// stops are left where construction put them, and NaN totals report
    /// as 0 km.
    Passthrough,
}

/// Settings for [`RouteOptimizer`](crate::optimizer::RouteOptimizer).
///
/// Every field has a default, so a partial (or empty) JSON object
/// deserializes.
///
/// # Examples
///
/// ```
/// use itinerary_route::config::{CoordinatePolicy, OptimizerConfig};
///
/// let config: OptimizerConfig = serde_json::from_str(r#"{"maxPasses": 50}"#).unwrap();
/// assert_eq!(config.max_passes, Some(50));
/// assert_eq!(config.coordinates, CoordinatePolicy::Validate);
///
/// let config = OptimizerConfig::default().with_max_passes(3);
/// assert_eq!(config.pass_limit(100), 3);
/// assert_eq!(OptimizerConfig::default().pass_limit(10), 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerConfig {
    /// Cap on full 2-opt passes; `None` means n² for n stops.
    pub max_passes: Option<usize>,
    /// Coordinate checking policy.
    pub coordinates: CoordinatePolicy,
}

impl OptimizerConfig {
    /// Sets an explicit 2-opt pass cap.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = Some(max_passes);
        self
    }

    /// Sets the coordinate policy.
    pub fn with_coordinate_policy(mut self, policy: CoordinatePolicy) -> Self {
        self.coordinates = policy;
        self
    }

    /// Pass cap to use for a route of `n` stops.
    pub fn pass_limit(&self, n: usize) -> usize {
        self.max_passes.unwrap_or_else(|| default_max_passes(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = OptimizerConfig::default();
        assert_eq!(c.max_passes, None);
        assert_eq!(c.coordinates, CoordinatePolicy::Validate);
        assert_eq!(c.pass_limit(0), 1);
        assert_eq!(c.pass_limit(4), 16);
    }

    #[test]
    fn test_deserialize_empty() {
        let c: OptimizerConfig = serde_json::from_str("{}").expect("valid");
        assert_eq!(c, OptimizerConfig::default());
    }

    #[test]
    fn test_deserialize_passthrough() {
        let c: OptimizerConfig =
            serde_json::from_str(r#"{"coordinates":"passthrough"}"#).expect("valid");
        assert_eq!(c.coordinates, CoordinatePolicy::Passthrough);
        assert_eq!(c.max_passes, None);
    }

    #[test]
    fn test_builders() {
        let c = OptimizerConfig::default()
            .with_max_passes(7)
            .with_coordinate_policy(CoordinatePolicy::Passthrough);
        assert_eq!(c.pass_limit(1000), 7);
        assert_eq!(c.coordinates, CoordinatePolicy::Passthrough);
    }
}
