// --- File: crates/calport_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod routes; // Route definitions
pub mod services; // Service abstractions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    auth_error, config_error, internal_error, upstream_error, validation_error,
    CalportError, Context, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, IntoHttpResponse};

pub use models::AccessCredential;
pub use services::{BoxFuture, BoxedError, SessionStore};
