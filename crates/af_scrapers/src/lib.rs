pub mod cli;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod scrapers;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cli::{handle_command, FetchArgs};
pub use extractor::Extractor;
pub use fetcher::{Fetcher, HttpFetcher, RawDocument};
pub use scrapers::ArticleScraper;
