use log::debug;
use url::Url;

use super::client::{ClientConfig, HttpTransport, ReqwestTransport};
use super::request::{self, LawContentRequest, LawIdentifier};
use crate::error::Result;
use crate::response::{LawContentResponse, LawListResponse, LawTextResponse};

/// High-level client for the e-Gov eLaws API.
///
/// Each method issues a single GET request through the configured
/// transport and maps the XML body into its response envelope. Failures
/// propagate verbatim; nothing is retried.
pub struct ElawsClient {
    config: ClientConfig,
    transport: Box<dyn HttpTransport>,
}

impl ElawsClient {
    /// Create a client backed by the production reqwest transport.
    pub fn new(config: ClientConfig) -> Self {
        let transport = Box::new(ReqwestTransport::new(&config.user_agent));
        Self { config, transport }
    }

    /// Create a client with an injected transport.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn fetch(&self, url: Url) -> Result<String> {
        debug!("GET {}", url);
        self.transport.fetch(url, self.config.timeout).await
    }

    /// Acquire the list of laws and ordinances in the given category.
    pub async fn list_of_laws(&self, lawtype: u32) -> Result<LawListResponse> {
        let url = request::lawlists_url(&self.config.base_url, self.config.version, lawtype)?;
        let body = self.fetch(url).await?;
        LawListResponse::from_text(&body)
    }

    /// Acquire the full text of a law or ordinance.
    pub async fn law_text(&self, law: &LawIdentifier) -> Result<LawTextResponse> {
        let url = request::lawdata_url(&self.config.base_url, self.config.version, law)?;
        let body = self.fetch(url).await?;
        LawTextResponse::from_text(&body)
    }

    /// Acquire an article, paragraph, or appendix-table excerpt.
    ///
    /// The selector combination is validated before any request is made.
    pub async fn law_content(&self, request: &LawContentRequest) -> Result<LawContentResponse> {
        let url = request::articles_url(&self.config.base_url, self.config.version, request)?;
        let body = self.fetch(url).await?;
        LawContentResponse::from_text(&body)
    }

    /// Acquire the list of laws and ordinances updated since the given date.
    pub async fn updated_laws(&self, date: u32) -> Result<LawListResponse> {
        let url = request::updatelawlists_url(&self.config.base_url, self.config.version, date)?;
        let body = self.fetch(url).await?;
        LawListResponse::from_text(&body)
    }
}

impl Default for ElawsClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
