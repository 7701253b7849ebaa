//! Liveness route handler

use axum::Json;
use serde_json::{json, Value};

/// Health check for load balancers
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
