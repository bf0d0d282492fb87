use af_core::{ArticleRecord, FetchConfig, Result};

use crate::extractor::Extractor;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::logging::Logger;

/// Fetches one page and extracts a title and body from it.
pub struct ArticleScraper {
    fetcher: Box<dyn Fetcher>,
    extractor: Extractor,
    logger: Logger,
}

impl ArticleScraper {
    pub fn new(fetcher: Box<dyn Fetcher>, extractor: Extractor) -> Self {
        Self {
            fetcher,
            extractor,
            logger: Logger::new().with_prefix("🦗".to_string()),
        }
    }

    pub fn with_config(config: FetchConfig) -> Result<Self> {
        Ok(Self::new(Box::new(HttpFetcher::new(config)?), Extractor::new()?))
    }

    /// Scrapes an article from the given URL
    pub async fn scrape_article(&self, url: &str) -> Result<ArticleRecord> {
        self.logger.info(&format!("Fetching {}", url));
        let document = self.fetcher.fetch(url).await?;

        let logger = self
            .logger
            .clone()
            .with_prefix(document.url.host_str().unwrap_or("-").to_string());
        logger.debug(&format!("Received {} bytes", document.body.len()));

        let partial = self.extractor.extract(&document.body);
        if !partial.is_complete() {
            logger.warn(&format!(
                "Incomplete extraction (title: {}, content: {})",
                partial.title.is_some(),
                partial.content.is_some()
            ));
        }

        let article = partial.into_record(url)?;
        logger.info(&format!("📰 {} ({} chars)", article.title, article.content.chars().count()));
        Ok(article)
    }
}
