use af_core::{Error, FetchConfig, Result};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use url::Url;

/// Bytes of a fetched page together with the URL they came from.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub url: Url,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieves the page at `url`. One attempt, no retries.
    async fn fetch(&self, url: &str) -> Result<RawDocument>;
}

/// Fetches pages over HTTP with a browser User-Agent and a request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

pub fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{}: {}", url, e)))
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument> {
        let url = parse_url(url)?;
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        Ok(RawDocument {
            url,
            body: body.to_vec(),
        })
    }
}
