// File: crates/calport_gcal/src/auth.rs
use std::sync::Arc;

use calport_common::AccessCredential;
use calport_config::GoogleConfig;
use chrono::{Duration, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ImportError;

/// Success payload of the token endpoint. Only the fields we keep are read.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
}

/// Redeems one-time authorization codes at the OAuth token endpoint.
#[derive(Clone)]
pub struct TokenExchanger {
    client: Client,
    config: Arc<GoogleConfig>,
}

impl TokenExchanger {
    pub fn new(client: Client, config: Arc<GoogleConfig>) -> Self {
        Self { client, config }
    }

    /// Exchange `code` for an access credential.
    ///
    /// A blank code fails with `InvalidInput` without contacting the provider.
    /// A non-success answer, or a success body lacking `access_token`, fails with
    /// `UpstreamAuth` carrying the provider's status and raw body.
    pub async fn exchange(&self, code: &str) -> Result<AccessCredential, ImportError> {
        let (status, body) = self.request_token(code).await?;

        let parsed = serde_json::from_str::<TokenResponse>(&body).ok();
        let Some(token) = parsed else {
            warn!("Token endpoint answered {} with an unreadable body", status);
            return Err(ImportError::UpstreamAuth {
                status: status.as_u16(),
                body,
            });
        };

        let access_token = match token.access_token {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                warn!("Token endpoint answered {} without an access_token", status);
                return Err(ImportError::UpstreamAuth {
                    status: status.as_u16(),
                    body,
                });
            }
        };

        let expires_at = token
            .expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));

        info!("Authorization code exchanged for an access token");
        Ok(AccessCredential {
            access_token,
            refresh_token: token.refresh_token,
            expires_at,
        })
    }

    /// Exchange `code` and hand back the provider's JSON answer untouched.
    pub async fn exchange_raw(&self, code: &str) -> Result<Value, ImportError> {
        let (_, body) = self.request_token(code).await?;
        serde_json::from_str(&body)
            .map_err(|e| ImportError::Unknown(format!("Malformed token response: {e}")))
    }

    /// POST the authorization-code grant. Returns the success status and raw body.
    async fn request_token(&self, code: &str) -> Result<(StatusCode, String), ImportError> {
        if code.trim().is_empty() {
            return Err(ImportError::InvalidInput(
                "serverAuthCode is required.".to_string(),
            ));
        }

        let form = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        debug!("Posting authorization code to {}", self.config.token_url);
        let response = self
            .client
            .post(&self.config.token_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Token endpoint rejected the authorization code: {}", status);
            return Err(ImportError::UpstreamAuth {
                status: status.as_u16(),
                body,
            });
        }

        Ok((status, body))
    }
}
