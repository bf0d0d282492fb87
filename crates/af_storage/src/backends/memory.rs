use std::sync::Arc;

use af_core::{ArticleRecord, ArticleStorage, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Keeps articles in memory; stores to the same URL replace the earlier record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    articles: Arc<RwLock<Vec<ArticleRecord>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn articles(&self) -> Vec<ArticleRecord> {
        self.articles.read().await.clone()
    }
}

#[async_trait]
impl ArticleStorage for InMemoryStorage {
    async fn store_article(&self, article: &ArticleRecord) -> Result<()> {
        let mut articles = self.articles.write().await;
        if let Some(existing) = articles.iter_mut().find(|a| a.url == article.url) {
            *existing = article.clone();
        } else {
            articles.push(article.clone());
        }
        Ok(())
    }
}
