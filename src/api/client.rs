use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

use crate::error::{ElawsError, Result};

/// Base URL of the production e-Gov eLaws API.
pub const DEFAULT_BASE_URL: &str = "https://elaws.e-gov.go.jp/api";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL requests are issued against
    pub base_url: String,
    /// API version number used in request paths
    pub version: u32,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: 1,
            timeout: Duration::from_secs(30),
            user_agent: format!("elaws/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Transport collaborator for API clients.
///
/// Fetches a single URL within the given timeout and returns the raw
/// response body. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn fetch(&self, url: Url, timeout: Duration) -> Result<String>;
}

/// Production transport backed by a pooled reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport with optimized HTTP client settings
    pub fn new(user_agent: &str) -> Self {
        let client = ClientBuilder::new()
            // Connection pool settings
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            // Performance optimizations
            .tcp_keepalive(Duration::from_secs(60))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default().user_agent)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn fetch(&self, url: Url, timeout: Duration) -> Result<String> {
        let response = self.client.get(url.clone()).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElawsError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.version, 1);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("elaws/"));
    }

    #[test]
    fn test_transport_creation() {
        let _transport = ReqwestTransport::new("test-agent/1.0");
        // Should not panic
    }
}
