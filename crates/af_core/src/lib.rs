pub mod config;
pub mod error;
pub mod storage;
pub mod types;

pub use config::FetchConfig;
pub use error::{Error, Result};
pub use storage::ArticleStorage;
pub use types::{ArticleRecord, PartialArticle};
