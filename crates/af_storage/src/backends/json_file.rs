use std::path::{Path, PathBuf};

use af_core::{ArticleRecord, ArticleStorage, Result};
use async_trait::async_trait;
use tracing::debug;

/// Writes a single article as pretty-printed JSON, overwriting the target file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ArticleStorage for JsonFileStorage {
    async fn store_article(&self, article: &ArticleRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(article)?;
        // Not atomic: a crash mid-write can leave a truncated file behind.
        tokio::fs::write(&self.path, json.as_bytes()).await?;
        debug!("Wrote {} bytes to {}", json.len(), self.path.display());
        Ok(())
    }
}
