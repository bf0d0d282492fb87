use std::path::PathBuf;

use af_core::config::DEFAULT_OUTPUT_FILE;
use af_core::{ArticleRecord, ArticleStorage, Result};
use clap::Args;

use crate::logging::Logger;
use crate::scrapers::ArticleScraper;

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// URL of the page to fetch
    pub url: String,

    /// Where to write the extracted article
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
}

/// Scrapes `args.url` and stores the result. Nothing is stored unless both
/// title and content were found.
pub async fn handle_command(
    args: &FetchArgs,
    scraper: &ArticleScraper,
    storage: &dyn ArticleStorage,
) -> Result<ArticleRecord> {
    let logger = Logger::new().with_prefix("💾".to_string());

    let article = match scraper.scrape_article(&args.url).await {
        Ok(article) => article,
        Err(e) => {
            logger.debug(&format!("Failed to scrape {}: {}", args.url, e));
            return Err(e);
        }
    };

    storage.store_article(&article).await?;
    logger.info(&format!("Stored article at {}", args.output.display()));
    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::Extractor;
    use crate::test_utils::StaticFetcher;
    use af_core::{Error, FetchConfig};
    use af_storage::InMemoryStorage;

    fn args(url: &str) -> FetchArgs {
        FetchArgs {
            url: url.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    fn scraper(html: &str) -> ArticleScraper {
        ArticleScraper::new(Box::new(StaticFetcher::new(html)), Extractor::new().unwrap())
    }

    #[tokio::test]
    async fn test_stores_complete_article() {
        let storage = InMemoryStorage::new();
        let scraper = scraper("<h1>Title</h1><div class=\"entry-content\">Body</div>");

        let article = handle_command(&args("https://example.com/a"), &scraper, &storage)
            .await
            .unwrap();

        assert_eq!(article.title, "Title");
        assert_eq!(storage.articles().await, vec![article]);
    }

    #[tokio::test]
    async fn test_extraction_failure_stores_nothing() {
        let storage = InMemoryStorage::new();
        let scraper = scraper("<p>One</p><p>Two</p>");

        let err = handle_command(&args("https://example.com"), &scraper, &storage)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Extraction { .. }));
        assert!(storage.articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_stores_nothing() {
        let storage = InMemoryStorage::new();
        let scraper = ArticleScraper::with_config(FetchConfig::default()).unwrap();

        let err = handle_command(&args("http://127.0.0.1:1/"), &scraper, &storage)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Fetch(_)));
        assert!(storage.articles().await.is_empty());
    }
}
