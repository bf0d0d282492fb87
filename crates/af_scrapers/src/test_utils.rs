use af_core::Result;
use async_trait::async_trait;

use crate::fetcher::{parse_url, Fetcher, RawDocument};

/// Serves the same canned page for every URL.
pub struct StaticFetcher {
    body: Vec<u8>,
}

impl StaticFetcher {
    pub fn new(html: &str) -> Self {
        Self {
            body: html.as_bytes().to_vec(),
        }
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument> {
        Ok(RawDocument {
            url: parse_url(url)?,
            body: self.body.clone(),
        })
    }
}
