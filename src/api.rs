//! JSON request/response contract.
//!
//! Request:
//!
//! ```json
//! { "stops": [{ "id": "a", "name": "Rome", "coordinates": [12.49, 41.90] }] }
//! ```
//!
//! Success responses carry the two ID orders and rounded distance figures;
//! failures carry `"success": false` and an error message. Transport and
//! authentication belong to the caller.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::models::Stop;
use crate::optimizer::{OptimizationResult, RouteOptimizer};

/// Body of an optimization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Stops in the caller's current order. Missing means empty.
    #[serde(default)]
    pub stops: Vec<Stop>,
}

/// Successful optimization, in the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeSuccess {
    pub success: bool,
    pub original_order: Vec<String>,
    pub optimized_order: Vec<String>,
    pub original_distance_km: i64,
    pub optimized_distance_km: i64,
    pub saved_km: i64,
    pub saved_percent: i64,
}

/// Rejected request, in the wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizeFailure {
    pub success: bool,
    pub error: String,
}

/// Either response shape; serialized without a wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptimizeResponse {
    Success(OptimizeSuccess),
    Failure(OptimizeFailure),
}

impl OptimizeResponse {
    /// Returns `true` for a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, OptimizeResponse::Success(_))
    }
}

impl From<OptimizationResult> for OptimizeResponse {
    fn from(result: OptimizationResult) -> Self {
        OptimizeResponse::Success(OptimizeSuccess {
            success: true,
            original_order: result.original_order,
            optimized_order: result.optimized_order,
            original_distance_km: result.report.original_km,
            optimized_distance_km: result.report.optimized_km,
            saved_km: result.report.saved_km,
            saved_percent: result.report.saved_percent,
        })
    }
}

impl From<RouteError> for OptimizeResponse {
    fn from(err: RouteError) -> Self {
        OptimizeResponse::Failure(OptimizeFailure {
            success: false,
            error: err.to_string(),
        })
    }
}

impl From<Result<OptimizationResult>> for OptimizeResponse {
    fn from(result: Result<OptimizationResult>) -> Self {
        match result {
            Ok(r) => r.into(),
            Err(e) => e.into(),
        }
    }
}

/// Runs `optimizer` on a decoded request.
pub fn handle(request: &OptimizeRequest, optimizer: &RouteOptimizer) -> OptimizeResponse {
    optimizer.optimize(&request.stops).into()
}

/// Decodes a JSON request body.
pub fn parse_request(body: &str) -> Result<OptimizeRequest> {
    Ok(serde_json::from_str(body)?)
}

/// Decodes `body`, optimizes it and encodes the response.
///
/// Always returns a JSON document; malformed input yields a failure
/// response rather than an error.
///
/// # Examples
///
/// ```
/// use itinerary_route::api::handle_json;
/// use itinerary_route::optimizer::RouteOptimizer;
///
/// let body = r#"{"stops":[
///     {"id":"a","name":"A","coordinates":[0.0,0.0]},
///     {"id":"c","name":"C","coordinates":[1.0,1.0]},
///     {"id":"b","name":"B","coordinates":[1.0,0.0]},
///     {"id":"d","name":"D","coordinates":[0.0,1.0]}
/// ]}"#;
/// let out: serde_json::Value =
///     serde_json::from_str(&handle_json(body, &RouteOptimizer::default())).unwrap();
/// assert_eq!(out["success"], true);
/// assert_eq!(out["optimizedOrder"], serde_json::json!(["a", "b", "c", "d"]));
/// ```
pub fn handle_json(body: &str, optimizer: &RouteOptimizer) -> String {
    let response = match parse_request(body) {
        Ok(request) => handle(&request, optimizer),
        Err(e) => e.into(),
    };
    encode(&response)
}

/// Encodes a response as JSON.
pub fn encode(response: &OptimizeResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"failed to encode response: {e}"}}"#)
    })
}
