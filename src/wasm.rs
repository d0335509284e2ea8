//! WebAssembly bindings.
//!
//! Exposes the optimizer to JavaScript with plain objects in the same shape
//! as the JSON contract in [`crate::api`].

use wasm_bindgen::prelude::*;

use crate::api::{self, OptimizeRequest};
use crate::config::OptimizerConfig;
use crate::optimizer::RouteOptimizer;

/// Optimizes `{ stops: [...] }` and returns the response object.
///
/// `config` is optional and takes the shape of [`OptimizerConfig`].
/// Input errors come back as `{ success: false, error }`; only values that
/// cannot be converted at all throw.
#[wasm_bindgen(js_name = optimizeRoute)]
pub fn optimize_route(request: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let request: OptimizeRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("invalid request: {e}"))))?;

    let config: OptimizerConfig = if config.is_undefined() || config.is_null() {
        OptimizerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from(js_sys::Error::new(&format!("invalid config: {e}"))))?
    };

    let response = api::handle(&request, &RouteOptimizer::new(config));
    serde_wasm_bindgen::to_value(&response)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("failed to encode response: {e}"))))
}
