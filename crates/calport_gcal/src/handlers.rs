// File: crates/calport_gcal/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use calport_common::{validation_error, CalportError, SessionStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::ImportError;
use crate::logic::{require_auth_code, CalendarImporter, ImportRequest, ImportResult};
use crate::session::exchange_for_session;

// Define shared state needed by GCal handlers
#[derive(Clone)]
pub struct GcalState {
    pub importer: Arc<CalendarImporter>,
    pub sessions: Arc<dyn SessionStore>,
}

/// Body carrying only an authorization code.
#[derive(Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CodeRequest {
    #[cfg_attr(feature = "openapi", schema(example = "4/0AbCdEf"))]
    #[serde(default)]
    pub server_auth_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeResponse {
    pub ok: bool,
    /// Token endpoint answer, unmodified
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub token_response: Value,
}

fn invalid_body(rejection: JsonRejection) -> CalportError {
    validation_error(format!("Invalid request body: {}", rejection.body_text()))
}

/// Handler to import the events of one calendar.
pub async fn import_calendar_handler(
    State(state): State<Arc<GcalState>>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> Result<Json<ImportResult>, CalportError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let result = state.importer.import_calendar(request).await?;
    info!(
        "Imported calendar '{}' ({})",
        result.calendar_name, result.calendar_id
    );
    Ok(Json(result))
}

/// Handler to exchange an authorization code for an opaque session id.
pub async fn exchange_session_handler(
    State(state): State<Arc<GcalState>>,
    payload: Result<Json<CodeRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, CalportError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let session_id = exchange_for_session(
        state.importer.exchanger(),
        state.sessions.as_ref(),
        request.server_auth_code.as_deref(),
    )
    .await?;
    Ok(Json(SessionResponse { session_id }))
}

/// Handler returning the raw token endpoint answer, for debugging client sign-in.
///
/// Provider rejections are relayed with the provider's status and body untouched.
pub async fn google_token_handler(
    State(state): State<Arc<GcalState>>,
    payload: Result<Json<CodeRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return invalid_body(rejection).into_response(),
    };
    let code = match require_auth_code(request.server_auth_code.as_deref()) {
        Ok(code) => code,
        Err(e) => return CalportError::from(e).into_response(),
    };

    match state.importer.exchanger().exchange_raw(code).await {
        Ok(token_response) => Json(TokenExchangeResponse {
            ok: true,
            token_response,
        })
        .into_response(),
        Err(ImportError::UpstreamAuth { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, body).into_response()
        }
        Err(e) => CalportError::from(e).into_response(),
    }
}
