use async_trait::async_trait;
use crate::types::ArticleRecord;
use crate::Result;

#[async_trait]
pub trait ArticleStorage: Send + Sync {
    /// Store an article, replacing whatever was previously stored at the same location
    async fn store_article(&self, article: &ArticleRecord) -> Result<()>;
}
