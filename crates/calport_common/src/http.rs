// --- File: crates/calport_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{CalportError, HttpStatusCode};

pub mod client;

/// Extension trait for CalportError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for CalportError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match &self {
            // Upstream status and body are passed through untouched so callers can debug
            // provider rejections directly.
            CalportError::UpstreamError { status, body, .. } => Json(json!({
                "error": self.message(),
                "status": status,
                "upstreamBody": body,
            })),
            _ => Json(json!({ "error": self.message() })),
        };

        if status_code.is_server_error() {
            tracing::error!("Request failed with {}: {}", status_code, self);
        } else {
            tracing::info!("Request rejected with {}: {}", status_code, self);
        }

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for CalportError so handlers can return it directly.
impl IntoResponse for CalportError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
