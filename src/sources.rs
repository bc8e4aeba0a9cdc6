//! External collaborator contracts
//!
//! Document acquisition and abstractive generation are services outside
//! the core: the pipeline consumes their outputs but never performs I/O
//! itself. These traits define that boundary so callers can plug in a
//! scraper or a generation model without the core knowing either exists.

use thiserror::Error;

use crate::types::Document;

/// Errors surfaced by external services. The core passes them through
/// unmodified and never retries.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The acquisition service could not produce an article.
    #[error("failed to fetch article: {0}")]
    Fetch(String),

    /// The generation service could not produce a summary.
    #[error("failed to generate summary: {0}")]
    Generation(String),
}

/// A fetched article, as delivered by an acquisition service.
#[derive(Debug, Clone)]
pub struct Article {
    /// Article title. May be empty.
    pub title: String,
    /// Article body text.
    pub text: String,
    /// The URL it was fetched from.
    pub url: String,
}

impl Article {
    /// Convert into the core's document type.
    pub fn into_document(self) -> Document {
        Document::new(self.title, self.text)
    }
}

/// Produces raw article title and body for a URL.
pub trait ArticleSource {
    fn fetch(&self, url: &str) -> Result<Article, SourceError>;
}

/// Produces a novel (abstractive) summary for normalized text.
///
/// This is the parallel path to the extractive core, not an input to it.
pub trait AbstractiveModel {
    fn generate(&self, text: &str, max_length: usize) -> Result<String, SourceError>;
}
