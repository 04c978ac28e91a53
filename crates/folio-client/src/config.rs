//! Client configuration.

use url::Url;

/// Path of the contact endpoint relative to the API base URL.
pub const CONTACT_PATH: &str = "api/contact";

/// Connection settings for the folio API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the folio API (scheme, host, port).
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FOLIO_API_URL` (default: `http://127.0.0.1:8080`)
    /// - `FOLIO_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("FOLIO_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        Ok(Self {
            base_url: parse_url(&raw)?,
            timeout_secs: std::env::var("FOLIO_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Configuration pointing at an explicit base URL.
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url(raw)?,
            timeout_secs: 30,
        })
    }

    /// Absolute URL of the contact endpoint.
    pub fn contact_url(&self) -> Result<Url, ConfigError> {
        self.base_url
            .join(CONTACT_PATH)
            .map_err(|e| ConfigError::InvalidUrl(self.base_url.to_string(), e.to_string()))
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL {0}: {1}")]
    InvalidUrl(String, String),
}
