// --- File: crates/calport_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Calport errors.
///
/// Feature crates convert their own error enums into this one at the HTTP boundary
/// by implementing `From<SpecificError> for CalportError`.
#[derive(Error, Debug)]
pub enum CalportError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The caller could not be authenticated or authorized
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Caller-supplied input failed a precondition
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An upstream service rejected a call. Status and body are kept verbatim.
    #[error("{service_name} returned status {status}")]
    UpstreamError {
        service_name: String,
        status: u16,
        body: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl CalportError {
    /// The human-readable message placed in the `error` field of a response body.
    pub fn message(&self) -> String {
        match self {
            CalportError::ConfigError(msg)
            | CalportError::AuthError(msg)
            | CalportError::ValidationError(msg)
            | CalportError::InternalError(msg) => msg.clone(),
            CalportError::UpstreamError { service_name, .. } => format!("{service_name} error"),
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CalportError {
    fn status_code(&self) -> u16 {
        match self {
            CalportError::ConfigError(_) => 500,
            CalportError::AuthError(_) => 401,
            CalportError::ValidationError(_) => 400,
            // An upstream that answered 2xx but still failed the call is a bad gateway,
            // never a success for our caller.
            CalportError::UpstreamError { status, .. } if (200..400).contains(status) => 502,
            CalportError::UpstreamError { status, .. } => *status,
            CalportError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, CalportError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, CalportError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, CalportError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| CalportError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, CalportError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| CalportError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> CalportError {
    CalportError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> CalportError {
    CalportError::ValidationError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> CalportError {
    CalportError::AuthError(message.to_string())
}

pub fn upstream_error(service_name: &str, status: u16, body: impl Into<String>) -> CalportError {
    CalportError::UpstreamError {
        service_name: service_name.to_string(),
        status,
        body: body.into(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> CalportError {
    CalportError::InternalError(message.to_string())
}
