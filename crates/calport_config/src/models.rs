// --- File: crates/calport_config/src/models.rs ---

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_TIME_ZONE: &str = "America/Toronto";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Google OAuth / Calendar Config ---
// client_id, client_secret and redirect_uri have no defaults; they must come from
// config/*.toml or CALPORT__GOOGLE__* env vars.
#[derive(Deserialize, Serialize, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
    pub redirect_uri: String,

    /// OAuth token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Base URL of the Calendar v3 REST API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// IANA zone the events endpoint interprets the window in.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Timeout applied to every outbound provider call.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl GoogleConfig {
    /// Builds a config with the three required settings and defaults for the rest.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
            time_zone: default_time_zone(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

// Keep the client secret out of debug output and logs.
impl std::fmt::Debug for GoogleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("token_url", &self.token_url)
            .field("api_base_url", &self.api_base_url)
            .field("time_zone", &self.time_zone)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_time_zone() -> String {
    DEFAULT_TIME_ZONE.to_string()
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // Mandatory: the import and exchange flows cannot run without it.
    pub google: GoogleConfig,
}
