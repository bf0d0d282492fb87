//! Heuristic title and body extraction over a parsed HTML document.
//!
//! Both fields are located by walking an ordered list of CSS selector rules and
//! stopping at the first rule whose first match has non-empty trimmed text.
//! Content falls back to the page's paragraphs when no rule matches.

use af_core::{Error, PartialArticle, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Title rules, highest priority first. `h1.title` and `h1.headline` can never
/// fire because a plain `h1` always wins; kept so the order stays as published.
pub const TITLE_SELECTORS: [&str; 6] = [
    "h1",
    "title",
    r#"[class*="title"]"#,
    r#"[id*="title"]"#,
    "h1.title",
    "h1.headline",
];

/// Content rules, highest priority first.
pub const CONTENT_SELECTORS: [&str; 8] = [
    "article",
    r#"[class*="content"]"#,
    r#"[class*="article"]"#,
    r#"[class*="body"]"#,
    ".post-content",
    ".entry-content",
    "main",
    r#"[role="main"]"#,
];

/// A compiled selector together with its source text, for logging.
#[derive(Debug, Clone)]
pub struct SelectorRule {
    css: String,
    selector: Selector,
}

impl SelectorRule {
    pub fn parse(css: &str) -> Result<Self> {
        let selector = Selector::parse(css)
            .map_err(|e| Error::Selector(format!("{}: {}", css, e)))?;
        Ok(Self {
            css: css.to_string(),
            selector,
        })
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// Trimmed text of the first matching element, if it has any.
    pub fn first_text(&self, document: &Html) -> Option<String> {
        document
            .select(&self.selector)
            .next()
            .and_then(trimmed_text)
    }
}

fn trimmed_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn first_match(rules: &[SelectorRule], document: &Html, field: &str) -> Option<String> {
    rules.iter().find_map(|rule| {
        let text = rule.first_text(document)?;
        debug!("{} matched rule `{}`", field, rule.css());
        Some(text)
    })
}

#[derive(Debug, Clone)]
pub struct Extractor {
    title_rules: Vec<SelectorRule>,
    content_rules: Vec<SelectorRule>,
    paragraph: Selector,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        Self::with_selectors(&TITLE_SELECTORS, &CONTENT_SELECTORS)
    }

    pub fn with_selectors(title: &[&str], content: &[&str]) -> Result<Self> {
        Ok(Self {
            title_rules: title.iter().map(|css| SelectorRule::parse(css)).collect::<Result<_>>()?,
            content_rules: content.iter().map(|css| SelectorRule::parse(css)).collect::<Result<_>>()?,
            paragraph: SelectorRule::parse("p")?.selector,
        })
    }

    /// Extracts from raw page bytes. Invalid UTF-8 sequences are replaced.
    pub fn extract(&self, body: &[u8]) -> PartialArticle {
        let html = String::from_utf8_lossy(body);
        let document = Html::parse_document(&html);
        self.extract_document(&document)
    }

    pub fn extract_document(&self, document: &Html) -> PartialArticle {
        PartialArticle {
            title: self.extract_title(document),
            content: self.extract_content(document),
        }
    }

    pub fn extract_title(&self, document: &Html) -> Option<String> {
        first_match(&self.title_rules, document, "title")
    }

    pub fn extract_content(&self, document: &Html) -> Option<String> {
        first_match(&self.content_rules, document, "content").or_else(|| {
            let paragraphs = self.paragraphs(document);
            if paragraphs.is_empty() {
                None
            } else {
                debug!("content taken from {} paragraphs", paragraphs.len());
                Some(paragraphs.join("\n"))
            }
        })
    }

    fn paragraphs(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.paragraph)
            .filter_map(trimmed_text)
            .collect()
    }
}
