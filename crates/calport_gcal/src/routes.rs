// --- File: crates/calport_gcal/src/routes.rs ---

use std::sync::Arc;

use axum::{routing::post, Router};
use calport_config::AppConfig;

use crate::error::ImportError;
use crate::handlers::{
    exchange_session_handler, google_token_handler, import_calendar_handler, GcalState,
};
use crate::logic::CalendarImporter;
use crate::session::InMemorySessionStore;

/// Creates a router containing all routes for the Google Calendar feature,
/// backed by a fresh HTTP client and an in-memory session store.
pub fn routes(config: Arc<AppConfig>) -> Result<Router, ImportError> {
    let importer = CalendarImporter::new(Arc::new(config.google.clone()))?;
    let gcal_state = Arc::new(GcalState {
        importer: Arc::new(importer),
        sessions: Arc::new(InMemorySessionStore::new()),
    });
    Ok(router(gcal_state))
}

/// Creates the Google Calendar router around an existing state.
pub fn router(gcal_state: Arc<GcalState>) -> Router {
    Router::new()
        .route("/import", post(import_calendar_handler))
        .route("/calendar/import", post(import_calendar_handler))
        .route("/oauth/exchange", post(exchange_session_handler))
        .route("/google/oauth/exchange", post(exchange_session_handler))
        .route("/auth/google", post(google_token_handler))
        .with_state(gcal_state)
}
