//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Default request timeout applied by the client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Settings for talking to the marketplace backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and optional path prefix of the backend.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("carlot/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Creates a config for the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl {
                url: self.base_url.clone(),
                message: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(())
    }

    /// Joins the base URL and an endpoint path.
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.user_agent.starts_with("carlot/"));
    }

    #[test]
    fn test_url_for() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(
            config.url_for("/api/trade-ins"),
            "https://api.example.com/api/trade-ins"
        );
        let config = ClientConfig::new("https://api.example.com/v2");
        assert_eq!(
            config.url_for("api/consignments"),
            "https://api.example.com/v2/api/consignments"
        );
    }

    #[test]
    fn test_validate() {
        assert!(ClientConfig::new("https://api.example.com").validate().is_ok());
        assert!(ClientConfig::new("example.com").validate().is_err());
        assert!(ClientConfig::new("ftp://example.com").validate().is_err());
    }
}
