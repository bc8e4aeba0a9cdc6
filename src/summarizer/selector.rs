//! Top-N sentence selection and ordering
//!
//! Takes a score vector and a sentence collection, keeps the N
//! highest-scoring sentences (ties broken by earlier document position),
//! and re-emits them in ascending document order so the summary reads
//! coherently rather than by rank.

use crate::error::SummarizeError;
use crate::types::{ScoredSentence, Sentence, SummaryResult};

/// Build a [`SummaryResult`] from scored sentences.
///
/// `requested` is clamped to `[1, S]`. Fails with
/// [`SummarizeError::InvalidRequest`] when the collection is empty or the
/// request is zero.
pub fn build_summary(
    sentences: &[Sentence],
    scores: &[f64],
    requested: usize,
    original_text: &str,
) -> Result<SummaryResult, SummarizeError> {
    let selected = select(sentences, scores, requested)?;

    let summary_len: usize = {
        let text_len: usize = selected.iter().map(|s| s.text.chars().count()).sum();
        // Joining spaces count toward the summary length.
        text_len + selected.len().saturating_sub(1)
    };

    Ok(SummaryResult {
        compression_ratio: compression_ratio(summary_len, original_text),
        sentence_count: sentences.len(),
        sentences: selected,
    })
}

/// The `requested` highest-scoring sentences, re-sorted into document order.
fn select(
    sentences: &[Sentence],
    scores: &[f64],
    requested: usize,
) -> Result<Vec<ScoredSentence>, SummarizeError> {
    if sentences.is_empty() {
        return Err(SummarizeError::InvalidRequest(
            "sentence collection is empty".to_string(),
        ));
    }
    if requested == 0 {
        return Err(SummarizeError::InvalidRequest(
            "requested sentence count must be at least 1".to_string(),
        ));
    }
    debug_assert_eq!(sentences.len(), scores.len());

    let n = requested.min(sentences.len());

    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    // Highest score first; equal scores keep document order.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked.sort_by_key(|(index, _)| *index);

    Ok(ranked
        .into_iter()
        .map(|(index, score)| ScoredSentence {
            index: sentences[index].index,
            text: sentences[index].text.clone(),
            score,
        })
        .collect())
}

/// Summary characters over original characters. Zero when the original is
/// empty, so the metric never divides by zero.
fn compression_ratio(summary_chars: usize, original_text: &str) -> f64 {
    let original_chars = original_text.chars().count();
    if original_chars == 0 {
        return 0.0;
    }
    summary_chars as f64 / original_chars as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, text: &str) -> Sentence {
        Sentence {
            index,
            text: text.to_string(),
            tokens: Vec::new(),
        }
    }

    fn collection() -> Vec<Sentence> {
        vec![
            sentence(0, "Birinci cümle."),
            sentence(1, "İkinci cümle."),
            sentence(2, "Üçüncü cümle."),
            sentence(3, "Dördüncü cümle."),
        ]
    }

    #[test]
    fn test_top_n_in_document_order() {
        let sentences = collection();
        let scores = [0.1, 0.9, 0.2, 0.8];

        let result = build_summary(&sentences, &scores, 2, "orijinal metin").unwrap();

        // Highest scores are at 1 and 3; output is by index, not rank.
        let indices: Vec<usize> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_cardinality_is_min_of_n_and_size() {
        let sentences = collection();
        let scores = [0.1, 0.9, 0.2, 0.8];

        for n in 1..=6 {
            let result = build_summary(&sentences, &scores, n, "x").unwrap();
            assert_eq!(result.sentences.len(), n.min(4));
        }
    }

    #[test]
    fn test_tie_broken_by_lower_index() {
        let sentences = collection();
        let scores = [0.5, 0.5, 0.5, 0.5];

        let result = build_summary(&sentences, &scores, 2, "x").unwrap();

        let indices: Vec<usize> = result.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_scores_travel_with_sentences() {
        let sentences = collection();
        let scores = [0.1, 0.9, 0.2, 0.8];

        let result = build_summary(&sentences, &scores, 2, "x").unwrap();

        assert_eq!(result.sentences[0].score, 0.9);
        assert_eq!(result.sentences[1].score, 0.8);
    }

    #[test]
    fn test_compression_ratio() {
        let sentences = vec![sentence(0, "abcde")];
        let scores = [1.0];
        let original = "abcdefghij"; // 10 chars

        let result = build_summary(&sentences, &scores, 1, original).unwrap();

        assert!((result.compression_ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_compression_counts_joining_spaces() {
        let sentences = vec![sentence(0, "ab"), sentence(1, "cd")];
        let scores = [1.0, 1.0];
        let original = "ab cd"; // summary "ab cd" is the whole text

        let result = build_summary(&sentences, &scores, 2, original).unwrap();

        assert!((result.compression_ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_request_is_invalid() {
        let sentences = collection();
        let scores = [0.1, 0.9, 0.2, 0.8];

        assert!(matches!(
            build_summary(&sentences, &scores, 0, "x"),
            Err(SummarizeError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_empty_collection_is_invalid() {
        assert!(matches!(
            build_summary(&[], &[], 3, "x"),
            Err(SummarizeError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_sentence_count_reports_collection_size() {
        let sentences = collection();
        let scores = [0.1, 0.9, 0.2, 0.8];

        let result = build_summary(&sentences, &scores, 1, "x").unwrap();

        assert_eq!(result.sentence_count, 4);
    }
}
