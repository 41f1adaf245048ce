//! transport.opendata.ch HTTP client.
//!
//! Issues a single connections query and decodes the response.

use std::time::Duration;

use tracing::{debug, info};

use crate::domain::Connection;

use super::convert::decode_connections;
use super::error::OpendataError;

/// Default base URL for the transport API.
pub const DEFAULT_BASE_URL: &str = "http://transport.opendata.ch/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the opendata client.
#[derive(Debug, Clone)]
pub struct OpendataConfig {
    /// Base URL for the API (defaults to the public endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum number of connections to ask for (API default when unset)
    pub limit: Option<u8>,
}

impl OpendataConfig {
    /// Create a config pointing at the public API.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL (for testing or a mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Limit the number of connections returned.
    pub fn with_limit(mut self, limit: Option<u8>) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for OpendataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            limit: None,
        }
    }
}

/// Client for the connections endpoint.
#[derive(Debug, Clone)]
pub struct OpendataClient {
    http: reqwest::Client,
    base_url: String,
    limit: Option<u8>,
}

impl OpendataClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OpendataConfig) -> Result<Self, OpendataError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.limit,
        })
    }

    /// Look up connections between two named stops.
    ///
    /// Stop names are sent as URL-encoded query parameters.
    pub async fn connections(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<Connection>, OpendataError> {
        let url = format!("{}/connections", self.base_url);

        let mut query = vec![("from", from.to_string()), ("to", to.to_string())];
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }

        info!(from, to, "querying connections");

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpendataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.bytes().await?;
        Ok(decode_connections(&body)?)
    }
}
