//! Frequency-weighted term scoring (TF-IDF)
//!
//! Each sentence is treated as a pseudo-document against the rest of the
//! collection. Term frequency is count over sentence length; inverse
//! document frequency is smoothed so it is always positive and never
//! divides by zero:
//!
//! `idf(t) = ln((1 + S) / (1 + df(t))) + 1`
//!
//! A sentence's score is the sum of `tf(t) * idf(t)` over its terms, which
//! equals the sum of `idf` over token occurrences divided by sentence
//! length. Scores are not normalized; only relative order matters.

use rustc_hash::{FxHashMap, FxHashSet};

use super::SentenceScorer;
use crate::types::Sentence;

/// TF-IDF sentence scorer. Stateless; the statistics live only for the
/// duration of one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl SentenceScorer for TfIdfScorer {
    fn score(&self, sentences: &[Sentence]) -> Vec<f64> {
        let total = sentences.len();

        // Document frequency per distinct term.
        let mut df: FxHashMap<&str, usize> = FxHashMap::default();
        for sentence in sentences {
            let distinct: FxHashSet<&str> =
                sentence.tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let idf = |term: &str| {
            let freq = df.get(term).copied().unwrap_or(0);
            ((1 + total) as f64 / (1 + freq) as f64).ln() + 1.0
        };

        sentences
            .iter()
            .map(|sentence| {
                if sentence.tokens.is_empty() {
                    return 0.0;
                }
                // Summing in token order keeps the floating-point result
                // reproducible across runs.
                let sum: f64 = sentence.tokens.iter().map(|t| idf(t)).sum();
                sum / sentence.tokens.len() as f64
            })
            .collect()
    }
}
