//! Configuration module
//!
//! Handles CLI configuration: where the bridge lives and how long a single
//! request may take.

use anyhow::{Context, Result};
use jobfinder_client::BridgeClient;
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the bridge backend
    pub bridge_url: String,

    /// Upper bound for a single request, response body included
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(bridge_url: String, request_timeout: Duration) -> Self {
        Self {
            bridge_url,
            request_timeout,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.bridge_url.is_empty() {
            anyhow::bail!("bridge_url cannot be empty");
        }

        if !self.bridge_url.starts_with("http://") && !self.bridge_url.starts_with("https://") {
            anyhow::bail!("bridge_url must start with http:// or https://");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds the HTTP client for the configured bridge
    pub fn client(&self) -> Result<BridgeClient> {
        BridgeClient::with_timeout(&self.bridge_url, self.request_timeout)
            .context("Failed to build HTTP client")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            jobfinder_client::DEFAULT_BRIDGE_URL.to_string(),
            Duration::from_secs(30),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bridge_url, "http://127.0.0.1:8000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.bridge_url = String::new();
        assert!(config.validate().is_err());

        config.bridge_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());

        config.bridge_url = "https://jobs.example.com".to_string();
        assert!(config.validate().is_ok());

        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_uses_bridge_url() {
        let config = Config::new("http://10.0.0.5:8000/".to_string(), Duration::from_secs(5));
        let client = config.client().unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.5:8000");
    }
}
