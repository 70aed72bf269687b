use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Seconds between automatic resyntheses while auto-refresh is on.
pub const DEFAULT_REFRESH_SECS: u64 = 300;

/// Pause after each announced processing step.
pub const DEFAULT_STEP_DELAY_MS: u64 = 900;

/// Retrieves an environment variable and splits it into a vector of strings based on a delimiter.
///
/// Empty segments are dropped, so an unset variable yields an empty vector.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `delimiter`: The character to split the environment variable's value by.
///
/// # Returns
/// - `Vec<String>`
pub fn get_env_var_as_vec(var: &str, delimiter: char) -> Vec<String> {
    env::var(var)
        .unwrap_or_default()
        .split(delimiter)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Reads a numeric environment variable, falling back to `default` when the
/// variable is unset or unparseable.
fn get_env_var_as_u64(var: &str, default: u64) -> u64 {
    match env::var(var) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("{} is not a number ({:?}), using {}", var, value, default);
            default
        }),
        Err(_) => default,
    }
}

/// Runtime settings for the desk.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub refresh_interval: Duration,
    pub step_delay: Duration,
    pub export_dir: PathBuf,
    pub log_dir: PathBuf,
    pub favorite_districts: Vec<String>,
    pub share_base_url: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            export_dir: PathBuf::from("exports"),
            log_dir: PathBuf::from("logs"),
            favorite_districts: Vec::new(),
            share_base_url: "http://localhost:5173".to_string(),
        }
    }
}

impl DeskConfig {
    /// Builds the configuration from `NEWSDESK_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            refresh_interval: Duration::from_secs(get_env_var_as_u64(
                "NEWSDESK_REFRESH_SECS",
                DEFAULT_REFRESH_SECS,
            )),
            step_delay: Duration::from_millis(get_env_var_as_u64(
                "NEWSDESK_STEP_DELAY_MS",
                DEFAULT_STEP_DELAY_MS,
            )),
            export_dir: env::var("NEWSDESK_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            log_dir: env::var("NEWSDESK_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            favorite_districts: get_env_var_as_vec("NEWSDESK_FAVORITE_DISTRICTS", ';'),
            share_base_url: env::var("NEWSDESK_SHARE_BASE_URL")
                .unwrap_or(defaults.share_base_url),
        }
    }
}
