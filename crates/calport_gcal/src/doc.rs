// File: crates/calport_gcal/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{CodeRequest, SessionResponse, TokenExchangeResponse};
use crate::logic::{ImportRequest, ImportResult};

#[utoipa::path(
    post,
    path = "/import",
    request_body(content = ImportRequest, example = json!({
        "serverAuthCode": "4/0AbCdEf",
        "calendarName": "Work",
        "days": 7
    })),
    responses(
        (status = 200, description = "Events of the requested calendar", body = ImportResult,
         example = json!({
             "calendarName": "Work",
             "calendarId": "abc123@group.calendar.google.com",
             "days": 7,
             "events": { "items": [] }
         })
        ),
        (status = 400, description = "Missing authorization code or invalid days",
         example = json!({ "error": "serverAuthCode is required." })
        ),
        (status = "default", description = "Provider rejected a call; its error status (4xx or 5xx) is relayed with its body",
         example = json!({
             "error": "Google API error",
             "status": 400,
             "upstreamBody": "{\"error\":\"invalid_grant\"}"
         })
        ),
        (status = 502, description = "Provider answered with a success status but an unusable body",
         example = json!({
             "error": "Google API error",
             "status": 200,
             "upstreamBody": "{\"token_type\":\"Bearer\"}"
         })
        ),
        (status = 500, description = "Calendar not found, transport failure or malformed provider payload",
         example = json!({ "error": "Calendar not found by summary: Work" })
        )
    ),
    tag = "gcal"
)]
fn doc_import_calendar_handler() {}

#[utoipa::path(
    post,
    path = "/oauth/exchange",
    request_body(content = CodeRequest, example = json!({ "serverAuthCode": "4/0AbCdEf" })),
    responses(
        (status = 200, description = "Session created", body = SessionResponse,
         example = json!({ "sessionId": "0b6f1f5e-8c53-4d0e-9a55-1f1e6b1c2d3e" })
        ),
        (status = 400, description = "Missing authorization code",
         example = json!({ "error": "serverAuthCode is required." })
        ),
        (status = 401, description = "Exchange failed")
    ),
    tag = "gcal"
)]
fn doc_exchange_session_handler() {}

#[utoipa::path(
    post,
    path = "/auth/google",
    request_body(content = CodeRequest, example = json!({ "serverAuthCode": "4/0AbCdEf" })),
    responses(
        (status = 200, description = "Raw token endpoint answer", body = TokenExchangeResponse),
        (status = 400, description = "Missing authorization code",
         example = json!({ "error": "serverAuthCode is required." })
        ),
        (status = "default", description = "Provider rejected the code; its error status (4xx or 5xx) and raw body are relayed verbatim",
         example = json!({ "error": "invalid_grant" })
        ),
        (status = 500, description = "Transport failure or malformed token response",
         example = json!({ "error": "Malformed token response: expected value at line 1 column 1" })
        )
    ),
    tag = "gcal"
)]
fn doc_google_token_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_import_calendar_handler,
        doc_exchange_session_handler,
        doc_google_token_handler
    ),
    components(
        schemas(
            ImportRequest,
            ImportResult,
            CodeRequest,
            SessionResponse,
            TokenExchangeResponse
        )
    ),
    tags(
        (name = "gcal", description = "Google Calendar import API")
    ),
    servers(
        (url = "/api", description = "Calport API server")
    )
)]
pub struct GcalApiDoc;
