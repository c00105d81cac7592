// --- File: crates/calport_common/src/routes.rs ---

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Liveness check. Does not touch the provider.
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Creates a router containing routes shared by every deployment.
///
/// # Returns
/// A router configured with common routes.
pub fn routes() -> Router {
    Router::new().route("/health", get(health_handler))
}
