//! # rapid-summarize
//!
//! Fast extractive summarization for news articles. The pipeline segments
//! raw text into sentences, normalizes and stopword-filters each one, and
//! ranks sentences with one of two interchangeable strategies:
//!
//! - **TF-IDF**: frequency-weighted term scoring, each sentence treated as
//!   a pseudo-document against the rest of the collection.
//! - **TextRank**: damped power iteration over a token-overlap similarity
//!   graph.
//!
//! The top-N sentences are returned in original document order with their
//! scores and a character-based compression ratio.
//!
//! # Quick start
//!
//! ```
//! use rapid_summarize::summarize_textrank;
//!
//! let text = "Enflasyon yükseldi. Merkez bankası faiz kararı aldı. \
//!             Piyasalar tepki verdi. Enflasyon beklentileri arttı.";
//!
//! let result = summarize_textrank(text, 2).unwrap();
//! assert_eq!(result.sentences.len(), 2);
//! println!("{}", result.summary());
//! ```
//!
//! For non-default languages, ranking parameters, or custom stopwords,
//! build a [`Summarizer`] from a [`SummarizeConfig`]:
//!
//! ```
//! use rapid_summarize::{Language, Method, SummarizeConfig, Summarizer};
//!
//! let config = SummarizeConfig::new()
//!     .with_language(Language::English)
//!     .with_damping(0.9)
//!     .with_stopword_overrides(["said"]);
//!
//! let summarizer = Summarizer::with_config(config);
//! let result = summarizer
//!     .summarize("Rates rose. Markets reacted to the rate decision.", 1, Method::TfIdf)
//!     .unwrap();
//! assert_eq!(result.sentences.len(), 1);
//! ```

pub mod error;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod scoring;
pub mod sources;
pub mod summarizer;
pub mod types;

pub use error::SummarizeError;
pub use nlp::cleaner::clean_article_text;
pub use scoring::{SentenceScorer, TextRankScorer, TfIdfScorer};
pub use sources::{AbstractiveModel, Article, ArticleSource, SourceError};
pub use summarizer::Summarizer;
pub use types::{
    Document, Language, Method, ScoredSentence, Sentence, SummarizeConfig, SummaryResult,
};

/// Summarize with the TF-IDF strategy and default configuration.
pub fn summarize_tfidf(
    text: &str,
    sentence_count: usize,
) -> Result<SummaryResult, SummarizeError> {
    Summarizer::new().summarize(text, sentence_count, Method::TfIdf)
}

/// Summarize with the TextRank strategy and default configuration.
pub fn summarize_textrank(
    text: &str,
    sentence_count: usize,
) -> Result<SummaryResult, SummarizeError> {
    Summarizer::new().summarize(text, sentence_count, Method::TextRank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_entry_points() {
        let text = "Enflasyon yükseldi. Merkez bankası faiz kararı aldı. Piyasalar tepki verdi.";

        let tfidf = summarize_tfidf(text, 2).unwrap();
        let textrank = summarize_textrank(text, 2).unwrap();

        assert_eq!(tfidf.sentences.len(), 2);
        assert_eq!(textrank.sentences.len(), 2);
    }

    #[test]
    fn test_empty_document_fails_at_both_entry_points() {
        assert!(matches!(
            summarize_tfidf("", 3),
            Err(SummarizeError::EmptyInput)
        ));
        assert!(matches!(
            summarize_textrank("", 3),
            Err(SummarizeError::EmptyInput)
        ));
    }
}
