//! Client configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LOADING_REGION: &str = "body";
pub const DEFAULT_PREFERENCES_PATH: &str = ".servicospro/preferences.json";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid SERVICOS_BASE_URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),

    /// A numeric variable could not be parsed or is out of range.
    #[error("invalid {var}: '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl HttpTimeouts {
    #[must_use]
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(&self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub timeouts: HttpTimeouts,
    pub loading_region: String,
    pub preferences_path: PathBuf,
    /// Host-reported system colour scheme, used only when no theme is stored.
    pub prefers_dark: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            timeouts: HttpTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            loading_region: DEFAULT_LOADING_REGION.to_owned(),
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            prefers_dark: false,
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `SERVICOS_BASE_URL`: default `http://127.0.0.1:5000`
    /// - `SERVICOS_POLL_INTERVAL_SECS`: default 30, must be non-zero
    /// - `SERVICOS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `SERVICOS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `SERVICOS_LOADING_REGION`: default `body`
    /// - `SERVICOS_PREFERENCES_PATH`: default `.servicospro/preferences.json`
    /// - `SERVICOS_PREFERS_DARK`: boolean, default false
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the base URL is not http(s) or a numeric
    /// variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = parse_base_url(std::env::var("SERVICOS_BASE_URL").ok().as_deref())?;

        let poll_secs = env_u64("SERVICOS_POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?;
        if poll_secs == 0 {
            return Err(ConfigError::InvalidNumber { var: "SERVICOS_POLL_INTERVAL_SECS", value: "0".into() });
        }

        let timeouts = HttpTimeouts {
            request_secs: env_u64("SERVICOS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_u64("SERVICOS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };

        let loading_region = std::env::var("SERVICOS_LOADING_REGION")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOADING_REGION.to_owned());

        let preferences_path = std::env::var("SERVICOS_PREFERENCES_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_PATH), PathBuf::from);

        Ok(Self {
            base_url,
            poll_interval: Duration::from_secs(poll_secs),
            timeouts,
            loading_region,
            preferences_path,
            prefers_dark: env_bool("SERVICOS_PREFERS_DARK").unwrap_or(false),
        })
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BASE_URL);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn env_u64(var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var, value }),
        Err(_) => Ok(default),
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
