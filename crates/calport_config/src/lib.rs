use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `{CALPORT_CONFIG_DIR}/default.toml` (optional)
/// 2. `{CALPORT_CONFIG_DIR}/{RUN_ENV}.toml` (optional)
/// 3. `CALPORT__*` environment variables, e.g. `CALPORT__GOOGLE__CLIENT_ID`
///
/// Missing Google client settings are reported here, at startup, rather than per request.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();
    let config_dir =
        PathBuf::from(env::var("CALPORT_CONFIG_DIR").unwrap_or_else(|_| "config".to_string()));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    tracing::debug!(
        "Loading config: default={}, env={}, prefix={}",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    validate(raw_config)
}

/// Parses a configuration from an in-memory TOML document. Applies the same validation
/// as [`load_config`].
pub fn load_config_from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
    let raw_config: AppConfig = Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()?;
    validate(raw_config)
}

/// Rejects blank required Google settings and unknown time zones.
pub fn validate(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let google = &config.google;
    for (key, value) in [
        ("google.client_id", &google.client_id),
        ("google.client_secret", &google.client_secret),
        ("google.redirect_uri", &google.redirect_uri),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "{key} is required (set {})",
                env_vars::config_path_to_env_var(key)
            )));
        }
    }

    if google.time_zone.parse::<Tz>().is_err() {
        return Err(ConfigError::Message(format!(
            "google.time_zone '{}' is not a valid IANA time zone",
            google.time_zone
        )));
    }

    if google.http_timeout_secs == 0 {
        return Err(ConfigError::Message(
            "google.http_timeout_secs must be greater than zero".to_string(),
        ));
    }

    Ok(config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, once.
///
/// `DOTENV_OVERRIDE` selects the file; otherwise a first command line argument starting
/// with `.env` is used, falling back to `.env`. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
