// --- File: crates/calport_gcal/src/service.rs ---
//! Google Calendar v3 REST client.
//!
//! Two read-only calls: list the user's calendars to resolve a display name to an
//! id, and list the events of one calendar within a time window.

use std::sync::Arc;

use calport_common::AccessCredential;
use calport_config::GoogleConfig;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ImportError;
use crate::logic::EventWindow;

/// The calendar id the provider treats as the user's default calendar.
pub const PRIMARY_CALENDAR_ID: &str = "primary";
/// Upper bound on events returned for one window.
pub const MAX_RESULTS: u32 = 250;

/// True when `name` selects the default calendar without a list lookup.
pub fn is_primary_alias(name: &str) -> bool {
    name.trim().is_empty() || name.eq_ignore_ascii_case(PRIMARY_CALENDAR_ID)
}

/// Google Calendar service implementation.
#[derive(Clone)]
pub struct GoogleCalendarService {
    client: Client,
    config: Arc<GoogleConfig>,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(client: Client, config: Arc<GoogleConfig>) -> Self {
        Self { client, config }
    }

    /// Resolve a calendar display name to its provider id.
    ///
    /// Blank names and exactly `primary` (any case, no padding) return `"primary"` without a network
    /// call. Otherwise the first calendar whose summary equals `name` exactly wins.
    pub async fn resolve_calendar_id(
        &self,
        credential: &AccessCredential,
        name: &str,
    ) -> Result<String, ImportError> {
        if is_primary_alias(name) {
            debug!("Calendar name '{}' resolves to the primary calendar", name);
            return Ok(PRIMARY_CALENDAR_ID.to_string());
        }

        let url = self.endpoint(&["users", "me", "calendarList"])?;
        let response = self
            .client
            .get(url)
            .bearer_auth(&credential.access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("Calendar list request failed with status {}", status);
            return Err(ImportError::UpstreamAuth {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| ImportError::Unknown(format!("Malformed calendar list response: {e}")))?;
        let Some(items) = payload.get("items").and_then(Value::as_array) else {
            warn!("Calendar list response carries no items array");
            return Err(ImportError::UpstreamAuth {
                status: status.as_u16(),
                body,
            });
        };

        let matched = items
            .iter()
            .find(|item| item.get("summary").and_then(Value::as_str) == Some(name));

        match matched.and_then(|item| item.get("id")).and_then(Value::as_str) {
            Some(id) => {
                info!("Resolved calendar '{}' to id {}", name, id);
                Ok(id.to_string())
            }
            None => Err(ImportError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    /// List the events of `calendar_id` from now until `days` days from now.
    ///
    /// The window is captured when this call starts. Recurring events are expanded,
    /// results are ordered by start time and capped at [`MAX_RESULTS`]. The provider payload is returned as-is.
    pub async fn fetch_events(
        &self,
        credential: &AccessCredential,
        calendar_id: &str,
        days: u32,
    ) -> Result<Value, ImportError> {
        let window = EventWindow::starting_now(days)?;
        let url = self.endpoint(&["calendars", calendar_id, "events"])?;
        let max_results = MAX_RESULTS.to_string();
        let query = [
            ("timeMin", window.time_min()),
            ("timeMax", window.time_max()),
            ("singleEvents", "true".to_string()),
            ("orderBy", "startTime".to_string()),
            ("maxResults", max_results),
            ("timeZone", self.config.time_zone.clone()),
        ];

        debug!(
            "Fetching events of {} between {} and {}",
            calendar_id,
            window.time_min(),
            window.time_max()
        );
        let response = self
            .client
            .get(url)
            .bearer_auth(&credential.access_token)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("Events request failed with status {}", status);
            return Err(ImportError::UpstreamAuth {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| ImportError::Unknown(format!("Malformed events response: {e}")))
    }

    /// Build `{api_base_url}/{segments...}`. Each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ImportError> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            ImportError::Unknown(format!(
                "Invalid API base URL '{}': {e}",
                self.config.api_base_url
            ))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ImportError::Unknown(format!(
                    "API base URL '{}' cannot carry a path",
                    self.config.api_base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
