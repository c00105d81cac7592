// --- File: crates/calport_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! Traits here decouple request handling from concrete implementations so the
//! backend can swap stores and tests can inject doubles.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::AccessCredential;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// Turns exchanged credentials into an opaque session handle.
///
/// Used only by the exchange-to-session flow; the calendar import never touches it.
pub trait SessionStore: Send + Sync {
    /// Store the credential and return a new, unguessable session id.
    fn create_session(&self, credential: AccessCredential) -> BoxFuture<'_, String, BoxedError>;

    /// Look up the credential stored under `session_id`.
    fn get_session(
        &self,
        session_id: &str,
    ) -> BoxFuture<'_, Option<AccessCredential>, BoxedError>;
}
