// --- File: crates/calport_common/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials obtained by exchanging an authorization code.
///
/// Scoped to the request that produced it: never cached, never shared across calls.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessCredential {
    /// Short-lived bearer token for provider API calls
    pub access_token: String,

    /// Present only when the provider grants offline access
    pub refresh_token: Option<String>,

    /// Absolute expiry derived from the provider's `expires_in`, if given
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessCredential {
    /// Create a credential carrying only an access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: None,
        }
    }
}

// Tokens must not end up in logs.
impl std::fmt::Debug for AccessCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessCredential")
            .field("access_token", &"<redacted>")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "<redacted>"),
            )
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
