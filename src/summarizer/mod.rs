//! Summarization pipeline
//!
//! Wires the preprocessing stages (segmentation, normalization, stopword
//! filtering) to a scoring strategy and the selector. A [`Summarizer`] is
//! built once — its stopword and abbreviation resources are loaded at
//! construction and shared read-only across calls — and holds no per-call
//! state, so concurrent use from multiple threads is safe.

pub mod selector;

use tracing::debug;

use crate::error::SummarizeError;
use crate::nlp::normalizer::normalize;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::scoring::{SentenceScorer, TextRankScorer, TfIdfScorer};
use crate::types::{Document, Method, Sentence, SummarizeConfig, SummaryResult};

/// The extractive summarization pipeline.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizeConfig,
    segmenter: SentenceSegmenter,
    stopwords: StopwordFilter,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with default configuration.
    pub fn new() -> Self {
        Self::with_config(SummarizeConfig::default())
    }

    /// Create a summarizer from a config.
    ///
    /// Stopword overrides are merged into the language's built-in set here,
    /// once, not per call.
    pub fn with_config(config: SummarizeConfig) -> Self {
        let mut stopwords = StopwordFilter::for_language(config.language);
        stopwords.add_words(config.stopword_overrides.iter());

        let segmenter = SentenceSegmenter::for_language(config.language)
            .with_min_sentence_chars(config.min_sentence_chars);

        Self {
            config,
            segmenter,
            stopwords,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SummarizeConfig {
        &self.config
    }

    /// Summarize `text` down to `sentence_count` sentences with the chosen
    /// strategy.
    pub fn summarize(
        &self,
        text: &str,
        sentence_count: usize,
        method: Method,
    ) -> Result<SummaryResult, SummarizeError> {
        match method {
            Method::TfIdf => self.summarize_with(&TfIdfScorer, text, sentence_count),
            Method::TextRank => self.summarize_with(
                &TextRankScorer::from_config(&self.config),
                text,
                sentence_count,
            ),
        }
    }

    /// Summarize a [`Document`]'s body text.
    pub fn summarize_document(
        &self,
        document: &Document,
        sentence_count: usize,
        method: Method,
    ) -> Result<SummaryResult, SummarizeError> {
        self.summarize(&document.raw_text, sentence_count, method)
    }

    /// Summarize with a caller-provided scoring strategy.
    pub fn summarize_with(
        &self,
        scorer: &dyn SentenceScorer,
        text: &str,
        sentence_count: usize,
    ) -> Result<SummaryResult, SummarizeError> {
        let sentences = self.prepare(text)?;

        // A single sentence is its own summary; no ranking computation.
        let scores = if sentences.len() == 1 {
            vec![1.0]
        } else {
            scorer.score(&sentences)
        };

        selector::build_summary(&sentences, &scores, sentence_count, text)
    }

    /// Segment, normalize, and stopword-filter the input text.
    ///
    /// Sentences whose tokens are entirely stopwords keep their place in
    /// the collection with an empty token list.
    fn prepare(&self, text: &str) -> Result<Vec<Sentence>, SummarizeError> {
        let mut sentences = self.segmenter.segment(text)?;

        for sentence in &mut sentences {
            let tokens = normalize(&sentence.text, self.config.language);
            sentence.tokens = self.stopwords.filter(tokens);
        }

        debug!(sentences = sentences.len(), "prepared sentence collection");
        Ok(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    const EXAMPLE: &str = "Enflasyon yükseldi. Merkez bankası faiz kararı aldı. \
                           Piyasalar tepki verdi. Enflasyon beklentileri arttı.";

    #[test]
    fn test_order_preservation() {
        let summarizer = Summarizer::new();

        for method in [Method::TfIdf, Method::TextRank] {
            let result = summarizer.summarize(EXAMPLE, 2, method).unwrap();
            for pair in result.sentences.windows(2) {
                assert!(pair[0].index < pair[1].index);
            }
        }
    }

    #[test]
    fn test_cardinality() {
        let summarizer = Summarizer::new();

        for n in 1..=6 {
            let result = summarizer.summarize(EXAMPLE, n, Method::TfIdf).unwrap();
            assert_eq!(result.sentences.len(), n.min(4));
            assert_eq!(result.sentence_count, 4);
        }
    }

    #[test]
    fn test_single_sentence_short_circuit() {
        let summarizer = Summarizer::new();

        for method in [Method::TfIdf, Method::TextRank] {
            let result = summarizer
                .summarize("Enflasyon yükseldi.", 3, method)
                .unwrap();

            assert_eq!(result.sentences.len(), 1);
            assert_eq!(result.sentences[0].score, 1.0);
        }
    }

    #[test]
    fn test_textrank_prefers_reinforcing_sentences() {
        // Indices 0 and 3 share "enflasyon"; 1 and 2 are isolated in the
        // similarity graph and keep only the teleport mass.
        let summarizer = Summarizer::new();
        let result = summarizer.summarize(EXAMPLE, 2, Method::TextRank).unwrap();

        let indices: Vec<usize> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn test_empty_document_fails() {
        let summarizer = Summarizer::new();

        assert!(matches!(
            summarizer.summarize("", 3, Method::TfIdf),
            Err(SummarizeError::EmptyInput)
        ));
    }

    #[test]
    fn test_idempotence() {
        let summarizer = Summarizer::new();

        for method in [Method::TfIdf, Method::TextRank] {
            let a = summarizer.summarize(EXAMPLE, 2, method).unwrap();
            let b = summarizer.summarize(EXAMPLE, 2, method).unwrap();

            assert_eq!(a.sentences.len(), b.sentences.len());
            for (x, y) in a.sentences.iter().zip(b.sentences.iter()) {
                assert_eq!(x.index, y.index);
                assert_eq!(x.text, y.text);
                assert_eq!(x.score, y.score);
            }
            assert_eq!(a.compression_ratio, b.compression_ratio);
        }
    }

    #[test]
    fn test_compression_ratio_bounds() {
        let summarizer = Summarizer::new();
        let result = summarizer.summarize(EXAMPLE, 2, Method::TfIdf).unwrap();

        assert!(result.compression_ratio > 0.0);
        assert!(result.compression_ratio < 1.0);
    }

    #[test]
    fn test_all_stopword_sentence_keeps_its_index() {
        // "Ve daha çok daha." normalizes to nothing but must keep its slot
        // so downstream indices stay aligned.
        let text = "Enflasyon yükseldi ve beklentiler arttı. Ve daha çok daha. \
                    Enflasyon verileri piyasalarda tepki yarattı.";
        let summarizer = Summarizer::new();

        let result = summarizer.summarize(text, 2, Method::TfIdf).unwrap();

        assert_eq!(result.sentence_count, 3);
        // The empty-token sentence scores 0.0 and is never selected over
        // scored peers.
        let indices: Vec<usize> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_termination_on_larger_input() {
        let vocab = [
            "enflasyon", "faiz", "kur", "borsa", "tahvil", "piyasa", "banka", "karar", "veri",
            "rapor", "büyüme", "ihracat",
        ];
        let mut text = String::new();
        for i in 0..300 {
            text.push_str("Analistler ");
            text.push_str(vocab[i % vocab.len()]);
            text.push(' ');
            text.push_str(vocab[(i + 3) % vocab.len()]);
            text.push(' ');
            text.push_str(vocab[(i + 7) % vocab.len()]);
            text.push_str(" verisini inceledi. ");
        }

        let summarizer = Summarizer::new();
        let result = summarizer.summarize(&text, 5, Method::TextRank).unwrap();

        assert_eq!(result.sentences.len(), 5);
        for s in &result.sentences {
            assert!(s.score.is_finite() && s.score >= 0.0);
        }
    }

    #[test]
    fn test_document_entry_point() {
        let summarizer = Summarizer::new();
        let document = Document::new("Başlık", EXAMPLE);

        let result = summarizer
            .summarize_document(&document, 2, Method::TextRank)
            .unwrap();

        assert_eq!(result.sentences.len(), 2);
    }

    #[test]
    fn test_stopword_overrides_change_scores() {
        // Making "enflasyon" a stopword removes the only overlap in the
        // example, leaving every sentence isolated under TextRank.
        let config = SummarizeConfig::new()
            .with_language(Language::Turkish)
            .with_stopword_overrides(["enflasyon"]);
        let summarizer = Summarizer::with_config(config);

        let result = summarizer.summarize(EXAMPLE, 2, Method::TextRank).unwrap();

        // All scores tie at the teleport value; ties resolve to the
        // earliest sentences.
        let indices: Vec<usize> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }
}
