// --- File: crates/calport_gcal/src/error.rs ---
use calport_common::error::{
    auth_error, internal_error, upstream_error, validation_error, CalportError,
};
use thiserror::Error;

/// Name reported in the `error` field when the provider rejects a call.
pub const UPSTREAM_SERVICE_NAME: &str = "Google API";

/// Failures of the import and exchange flows.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Caller input failed a precondition. Raised before any network call.
    #[error("{0}")]
    InvalidInput(String),

    /// The provider answered with a failure status or an unusable body.
    #[error("Google API returned status {status}: {body}")]
    UpstreamAuth { status: u16, body: String },

    /// No calendar in the user's list carries the requested summary.
    #[error("Calendar not found by summary: {name}")]
    NotFound { name: String },

    /// The exchange-to-session flow could not obtain a credential.
    #[error("Token exchange failed: {0}")]
    Unauthorized(#[source] Box<ImportError>),

    /// Transport failures, malformed payloads and anything else unclassified.
    #[error("{0}")]
    Unknown(String),
}

impl From<reqwest::Error> for ImportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ImportError::Unknown(format!("Google API request timed out: {err}"))
        } else {
            ImportError::Unknown(format!("Google API request failed: {err}"))
        }
    }
}

impl From<ImportError> for CalportError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InvalidInput(msg) => validation_error(msg),
            ImportError::UpstreamAuth { status, body } => {
                upstream_error(UPSTREAM_SERVICE_NAME, status, body)
            }
            // Callers see an unresolved calendar as a generic server failure.
            ImportError::NotFound { .. } => internal_error(err),
            ImportError::Unauthorized(_) => auth_error(err),
            ImportError::Unknown(msg) => internal_error(msg),
        }
    }
}
