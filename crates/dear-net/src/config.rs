//! Remote API client configuration.

use std::time::Duration;

use reqwest::Url;

use dear_shared::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS,
    DEFAULT_WRITE_TIMEOUT_SECS,
};

use crate::error::{ApiError, Result};

/// Where the backend lives and how long to wait for it.
///
/// A read timeout longer than the others leaves room for slow assistant
/// replies. Timeouts surface as ordinary transport errors.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Normalised base URL, always ending in `/`.
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl ApiConfig {
    /// Validate `base_url` and use the default timeouts.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
        })
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration, write: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self.write_timeout = write;
        self
    }

    /// Upper bound for one whole exchange: connect, upload, then wait for
    /// the reply.
    pub fn total_timeout(&self) -> Duration {
        self.connect_timeout + self.write_timeout + self.read_timeout
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
            write_timeout: Duration::from_secs(DEFAULT_WRITE_TIMEOUT_SECS),
        }
    }
}

/// Require `http(s)://host` and make sure relative endpoint paths append to
/// the base path instead of replacing its last segment.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidBaseUrl("base URL must not be empty".into()));
    }

    let mut url =
        Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ApiError::InvalidBaseUrl(format!(
            "{trimmed}: expected http:// or https:// with a host"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
