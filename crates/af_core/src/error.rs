use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Couldn't extract title and/or content. Title: {title}, Content: {content}")]
    Extraction { title: bool, content: bool },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
