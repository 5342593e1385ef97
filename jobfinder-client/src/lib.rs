//! Job Finder HTTP Client
//!
//! A small, type-safe HTTP client for the Job Finder bridge backend.
//!
//! The bridge exposes three endpoints: `GET /jobs` to list stored job
//! listings, `POST /search` to have the search agent look for jobs at a
//! company, and `POST /apply` to have the apply agent submit an application.
//!
//! # Example
//!
//! ```no_run
//! use jobfinder_client::BridgeClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BridgeClient::new("http://127.0.0.1:8000");
//!
//!     let reply = client.search("Acme").await?;
//!     println!("{}", reply.result);
//!
//!     for job in client.list_jobs().await? {
//!         println!("{} {}", job.id, job.title);
//!     }
//!     Ok(())
//! }
//! ```

mod apply;
mod board;
pub mod error;
mod jobs;
mod search;

// Re-export commonly used types
pub use board::JobBoard;
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default address of the bridge backend
pub const DEFAULT_BRIDGE_URL: &str = "http://127.0.0.1:8000";

/// HTTP client for the bridge API
#[derive(Debug, Clone)]
pub struct BridgeClient {
    /// Base URL of the bridge (e.g., "http://127.0.0.1:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BridgeClient {
    /// Create a new bridge client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the bridge (e.g., "http://127.0.0.1:8000")
    ///
    /// # Example
    /// ```
    /// use jobfinder_client::BridgeClient;
    ///
    /// let client = BridgeClient::new("http://127.0.0.1:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new bridge client with a custom HTTP client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the bridge
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a bridge client whose requests give up after `timeout`
    ///
    /// Agent round-trips can be slow, so the timeout applies to the whole
    /// request including the response body.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// Get the base URL of the bridge
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Transport failures while reading the body, non-success status codes
    /// and undecodable bodies map to distinct [`ClientError`] variants.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
