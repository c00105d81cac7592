// --- File: crates/calport_gcal/src/logic.rs ---
use std::sync::Arc;

use calport_common::create_client;
use calport_config::GoogleConfig;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::auth::TokenExchanger;
use crate::error::ImportError;
use crate::service::{GoogleCalendarService, PRIMARY_CALENDAR_ID};

/// Window length used when the caller does not send `days`.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

// --- Data Structures ---

/// Body of an import call.
#[derive(Deserialize, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    /// One-time authorization code from the client-side sign-in
    #[cfg_attr(feature = "openapi", schema(example = "4/0AbCdEf"))]
    #[serde(default)]
    pub server_auth_code: Option<String>,

    /// Display name of the calendar; blank or "primary" selects the default calendar
    #[cfg_attr(feature = "openapi", schema(example = "Work"))]
    #[serde(default)]
    pub calendar_name: Option<String>,

    /// Length of the window starting now, in days
    #[cfg_attr(feature = "openapi", schema(example = 7))]
    #[serde(default)]
    pub days: Option<i64>,
}

impl ImportRequest {
    pub fn new(server_auth_code: impl Into<String>) -> Self {
        Self {
            server_auth_code: Some(server_auth_code.into()),
            ..Self::default()
        }
    }

    pub fn with_calendar_name(mut self, calendar_name: impl Into<String>) -> Self {
        self.calendar_name = Some(calendar_name.into());
        self
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }
}

// The authorization code is a credential.
impl std::fmt::Debug for ImportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportRequest")
            .field(
                "server_auth_code",
                &self.server_auth_code.as_ref().map(|_| "<redacted>"),
            )
            .field("calendar_name", &self.calendar_name)
            .field("days", &self.days)
            .finish()
    }
}

/// Outcome of a successful import.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// The calendar name as requested
    #[cfg_attr(feature = "openapi", schema(example = "Work"))]
    pub calendar_name: String,
    /// The provider id the name resolved to
    #[cfg_attr(feature = "openapi", schema(example = "abc123@group.calendar.google.com"))]
    pub calendar_id: String,
    /// Window length actually used
    #[serde(rename = "days")]
    #[cfg_attr(feature = "openapi", schema(example = 7))]
    pub window_days: u32,
    /// Events payload exactly as returned by the provider
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub events: Value,
}

/// Half-open time range `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EventWindow {
    /// Window of `days` whole days beginning at `start`.
    pub fn starting_at(start: DateTime<Utc>, days: u32) -> Result<Self, ImportError> {
        let end = Duration::try_days(i64::from(days))
            .and_then(|span| start.checked_add_signed(span))
            .ok_or_else(|| ImportError::InvalidInput(format!("days is out of range: {days}")))?;
        Ok(Self { start, end })
    }

    /// Window of `days` whole days beginning at the current instant.
    pub fn starting_now(days: u32) -> Result<Self, ImportError> {
        Self::starting_at(Utc::now(), days)
    }

    /// Lower bound as RFC 3339 UTC with millisecond precision.
    pub fn time_min(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Upper bound as RFC 3339 UTC with millisecond precision.
    pub fn time_max(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Validate the caller's `days`, defaulting to [`DEFAULT_WINDOW_DAYS`].
pub fn window_days(days: Option<i64>) -> Result<u32, ImportError> {
    let days = days.unwrap_or(DEFAULT_WINDOW_DAYS);
    if days < 0 {
        return Err(ImportError::InvalidInput(format!(
            "days must not be negative: {days}"
        )));
    }
    u32::try_from(days)
        .map_err(|_| ImportError::InvalidInput(format!("days is out of range: {days}")))
}

/// Validate and return the authorization code.
pub fn require_auth_code(code: Option<&str>) -> Result<&str, ImportError> {
    match code {
        Some(code) if !code.trim().is_empty() => Ok(code),
        _ => Err(ImportError::InvalidInput(
            "serverAuthCode is required.".to_string(),
        )),
    }
}

// --- Orchestration ---

/// Runs exchange, resolve and fetch in sequence for one import call.
///
/// Nothing is cached between calls; every import starts from a fresh code.
#[derive(Clone)]
pub struct CalendarImporter {
    exchanger: TokenExchanger,
    calendars: GoogleCalendarService,
}

impl CalendarImporter {
    /// Build an importer with its own HTTP client honoring the configured timeout.
    pub fn new(config: Arc<GoogleConfig>) -> Result<Self, ImportError> {
        let client = create_client(config.http_timeout_secs, true)
            .map_err(|e| ImportError::Unknown(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config))
    }

    /// Build an importer sharing an existing HTTP client.
    pub fn with_client(client: Client, config: Arc<GoogleConfig>) -> Self {
        Self {
            exchanger: TokenExchanger::new(client.clone(), config.clone()),
            calendars: GoogleCalendarService::new(client, config),
        }
    }

    pub fn exchanger(&self) -> &TokenExchanger {
        &self.exchanger
    }

    pub fn calendars(&self) -> &GoogleCalendarService {
        &self.calendars
    }

    /// Import the events of one calendar for the next `days` days.
    ///
    /// Input is validated before any network call. The first failing step aborts
    /// the rest and its error is returned unchanged.
    pub async fn import_calendar(
        &self,
        request: ImportRequest,
    ) -> Result<ImportResult, ImportError> {
        let code = require_auth_code(request.server_auth_code.as_deref())?;
        let days = window_days(request.days)?;
        // Reject windows past the representable range before any call.
        EventWindow::starting_now(days)?;
        let calendar_name = request
            .calendar_name
            .unwrap_or_else(|| PRIMARY_CALENDAR_ID.to_string());

        info!("Importing calendar '{}' for {} day(s)", calendar_name, days);

        let credential = self.exchanger.exchange(code).await?;
        let calendar_id = self
            .calendars
            .resolve_calendar_id(&credential, &calendar_name)
            .await?;

        let events = self
            .calendars
            .fetch_events(&credential, &calendar_id, days)
            .await?;

        debug!("Import of calendar {} complete", calendar_id);
        Ok(ImportResult {
            calendar_name,
            calendar_id,
            window_days: days,
            events,
        })
    }
}
