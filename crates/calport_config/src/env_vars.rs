//! Environment variable naming for the Calport configuration.
//!
//! Every configuration path maps onto a single variable name, e.g. `google.client_id`
//! becomes `CALPORT__GOOGLE__CLIENT_ID`. The prefix can be changed through `PREFIX`.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "CALPORT";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "google.client_id")
///
/// # Returns
///
/// The environment variable name (e.g., "CALPORT__GOOGLE__CLIENT_ID")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}
