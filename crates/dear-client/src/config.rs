//! Client configuration loaded from environment variables.
//!
//! Every setting has a default, so the client starts with zero configuration
//! against the Android emulator's view of a locally running backend.

use std::path::PathBuf;
use std::time::Duration;

use dear_net::ApiConfig;
use dear_shared::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS,
    DEFAULT_WRITE_TIMEOUT_SECS,
};

/// Client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL, including the API prefix.
    /// Env: `DEAR_BASE_URL`
    /// Default: `http://10.0.2.2:8000/api/v1/`
    pub base_url: String,

    /// Directory holding `dear.db`.
    /// Env: `DEAR_DATA_DIR`
    /// Default: `None` (the platform data directory).
    pub data_dir: Option<PathBuf>,

    /// Env: `DEAR_CONNECT_TIMEOUT_SECS`
    /// Default: 30 seconds.
    pub connect_timeout: Duration,

    /// Env: `DEAR_READ_TIMEOUT_SECS`
    /// Default: 60 seconds, assistant replies take a while.
    pub read_timeout: Duration,

    /// Env: `DEAR_WRITE_TIMEOUT_SECS`
    /// Default: 30 seconds.
    pub write_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("DEAR_BASE_URL") {
            match dear_net::config::normalize_base_url(&url) {
                Ok(normalized) => config.base_url = normalized.to_string(),
                Err(e) => {
                    tracing::warn!(value = %url, error = %e, "Invalid DEAR_BASE_URL, using default");
                }
            }
        }

        if let Some(dir) = lookup("DEAR_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(timeout) = seconds(&lookup, "DEAR_CONNECT_TIMEOUT_SECS") {
            config.connect_timeout = timeout;
        }
        if let Some(timeout) = seconds(&lookup, "DEAR_READ_TIMEOUT_SECS") {
            config.read_timeout = timeout;
        }
        if let Some(timeout) = seconds(&lookup, "DEAR_WRITE_TIMEOUT_SECS") {
            config.write_timeout = timeout;
        }

        config
    }

    /// Settings for the HTTP client.
    pub fn api_config(&self) -> dear_net::Result<ApiConfig> {
        Ok(ApiConfig::new(&self.base_url)?.with_timeouts(
            self.connect_timeout,
            self.read_timeout,
            self.write_timeout,
        ))
    }
}

/// A positive whole number of seconds, or `None` (with a warning) otherwise.
fn seconds(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Duration> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            tracing::warn!(value = %raw, "Invalid {key}, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.read_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("DEAR_BASE_URL", "https://dear.example.com/api/v1"),
            ("DEAR_DATA_DIR", "/tmp/dear"),
            ("DEAR_READ_TIMEOUT_SECS", "120"),
        ]);
        assert_eq!(config.base_url, "https://dear.example.com/api/v1/");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/dear")));
        assert_eq!(config.read_timeout, Duration::from_secs(120));
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("DEAR_BASE_URL", "ftp://nope"),
            ("DEAR_CONNECT_TIMEOUT_SECS", "soon"),
            ("DEAR_WRITE_TIMEOUT_SECS", "0"),
        ]);
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn api_config_carries_timeouts() {
        let config = config_from(&[("DEAR_CONNECT_TIMEOUT_SECS", "5")]);
        let api = config.api_config().unwrap();
        assert_eq!(api.connect_timeout, Duration::from_secs(5));
        assert_eq!(api.base_url.as_str(), DEFAULT_BASE_URL);
    }
}
