use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A fully extracted article, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub url: String,
    pub title: String,
    pub content: String,
}

/// Whatever the extractor managed to find. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialArticle {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PartialArticle {
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.content.is_some()
    }

    /// Turns the partial result into a record, or reports which fields were not found.
    pub fn into_record(self, url: impl Into<String>) -> Result<ArticleRecord> {
        match (self.title, self.content) {
            (Some(title), Some(content)) => Ok(ArticleRecord {
                url: url.into(),
                title,
                content,
            }),
            (title, content) => Err(Error::Extraction {
                title: title.is_some(),
                content: content.is_some(),
            }),
        }
    }
}
