//! Sentence scoring strategies
//!
//! TF-IDF and TextRank are two implementations of one capability: produce
//! one importance score per sentence from a sentence collection. The
//! caller picks the strategy at invocation time; everything downstream
//! (selection, ordering, metrics) is strategy-agnostic.

pub mod textrank;
pub mod tfidf;

pub use textrank::TextRankScorer;
pub use tfidf::TfIdfScorer;

use crate::types::Sentence;

/// A strategy that scores every sentence in a collection.
///
/// Implementations must be deterministic and return one finite,
/// non-negative score per sentence, indexed by position. A sentence with
/// no tokens scores 0.0 (or the strategy's floor) rather than erroring.
pub trait SentenceScorer {
    /// Produce one score per sentence.
    fn score(&self, sentences: &[Sentence]) -> Vec<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorers_share_the_contract() {
        let sentences = vec![
            Sentence {
                index: 0,
                text: "Enflasyon yükseldi.".to_string(),
                tokens: vec!["enflasyon".to_string(), "yükseldi".to_string()],
            },
            Sentence {
                index: 1,
                text: "Enflasyon beklentileri arttı.".to_string(),
                tokens: vec![
                    "enflasyon".to_string(),
                    "beklentileri".to_string(),
                    "arttı".to_string(),
                ],
            },
        ];

        let strategies: Vec<Box<dyn SentenceScorer>> = vec![
            Box::new(TfIdfScorer),
            Box::new(TextRankScorer::default()),
        ];

        for strategy in &strategies {
            let scores = strategy.score(&sentences);
            assert_eq!(scores.len(), sentences.len());
            for &score in &scores {
                assert!(score.is_finite() && score >= 0.0);
            }
        }
    }
}
