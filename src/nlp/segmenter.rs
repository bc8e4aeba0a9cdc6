//! Sentence segmentation
//!
//! Splits raw article text into an ordered sequence of sentences, keeping
//! the verbatim text of each. Boundary detection is rule-driven: a
//! per-language abbreviation table plus a handful of structural rules
//! (decimal numbers, quoted and parenthetical spans, paragraph breaks).
//! The abbreviation table is data, not logic — extend it with
//! [`SentenceSegmenter::with_abbreviations`] when a corpus needs more.

use rustc_hash::FxHashSet;

use crate::error::SummarizeError;
use crate::types::{Language, Sentence};

/// Abbreviations common in Turkish news text.
const TURKISH_ABBREVIATIONS: &[&str] = &[
    "dr", "doç", "prof", "av", "sn", "vb", "vs", "örn", "bkz", "yy", "tel", "no", "cad", "sok",
    "apt", "mah", "alb", "yzb", "gen", "org", "müh",
];

/// Abbreviations common in English text.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "inc", "ltd", "co", "corp", "etc", "vs",
    "fig", "gen", "rep", "sen", "rev", "hon", "no",
];

/// Fallback table for languages without a dedicated list.
const COMMON_ABBREVIATIONS: &[&str] = &["dr", "prof", "st", "etc", "vs", "no"];

/// Rule-based sentence boundary detector.
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    /// Lowercased words that suppress a following `.` as a boundary.
    abbreviations: FxHashSet<String>,
    /// Sentences shorter than this many characters are dropped.
    min_sentence_chars: usize,
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

impl SentenceSegmenter {
    /// Create a segmenter with the abbreviation table for a language.
    pub fn for_language(language: Language) -> Self {
        let table = match language {
            Language::Turkish => TURKISH_ABBREVIATIONS,
            Language::English => ENGLISH_ABBREVIATIONS,
            _ => COMMON_ABBREVIATIONS,
        };
        Self {
            abbreviations: table.iter().map(|s| s.to_string()).collect(),
            min_sentence_chars: 0,
        }
    }

    /// Drop sentences shorter than `chars` characters.
    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    /// Extend the abbreviation table.
    pub fn with_abbreviations(mut self, words: &[&str]) -> Self {
        for word in words {
            self.abbreviations.insert(word.to_lowercase());
        }
        self
    }

    /// Split text into sentences with contiguous 0-based indices.
    ///
    /// Fails with [`SummarizeError::EmptyInput`] when no sentence survives.
    pub fn segment(&self, text: &str) -> Result<Vec<Sentence>, SummarizeError> {
        let chars: Vec<char> = text.chars().collect();
        let mut pieces: Vec<String> = Vec::new();
        let mut current = String::new();

        let mut in_straight_quote = false;
        let mut curly_quote_depth = 0usize;
        let mut paren_depth = 0usize;

        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];

            // A paragraph break always ends the current sentence, and
            // resets span tracking so an unbalanced quote in one paragraph
            // cannot swallow the rest of the article.
            if ch == '\n' && chars.get(i + 1).copied() == Some('\n') {
                self.flush(&mut current, &mut pieces);
                in_straight_quote = false;
                curly_quote_depth = 0;
                paren_depth = 0;
                while i < chars.len() && chars[i] == '\n' {
                    i += 1;
                }
                continue;
            }

            current.push(ch);
            match ch {
                '"' => in_straight_quote = !in_straight_quote,
                '“' => curly_quote_depth += 1,
                '”' => curly_quote_depth = curly_quote_depth.saturating_sub(1),
                '(' => paren_depth += 1,
                ')' => paren_depth = paren_depth.saturating_sub(1),
                '.' | '!' | '?' | '…' => {
                    let inside_span =
                        in_straight_quote || curly_quote_depth > 0 || paren_depth > 0;
                    if !inside_span && self.is_boundary(&chars, i) {
                        self.flush(&mut current, &mut pieces);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        self.flush(&mut current, &mut pieces);

        if pieces.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        Ok(pieces
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence::new(index, text))
            .collect())
    }

    /// Decide whether the terminal punctuation at `i` ends a sentence.
    fn is_boundary(&self, chars: &[char], i: usize) -> bool {
        // Close the whole punctuation run: "?!" splits after '!', "..."
        // after the last dot.
        if matches!(chars.get(i + 1).copied(), Some('.' | '!' | '?' | '…')) {
            return false;
        }

        // Boundaries are only taken before whitespace or at end of text;
        // this keeps URLs and inline dots ("www.bbc.com") intact.
        match chars.get(i + 1) {
            None => {}
            Some(next) if next.is_whitespace() => {}
            _ => return false,
        }

        if chars[i] == '.' {
            let word = preceding_word(chars, i);

            // "Dr. Ahmet" — the dot belongs to the abbreviation.
            if self.abbreviations.contains(&word.to_lowercase()) {
                return false;
            }

            // "J. Doe" — an initial, not a boundary.
            if word.chars().count() == 1 && word.chars().all(|c| c.is_uppercase()) {
                return false;
            }

            // A dot followed by a lowercase continuation is mid-sentence.
            if let Some(next) = chars[i + 1..].iter().find(|c| !c.is_whitespace()) {
                if next.is_lowercase() {
                    return false;
                }
            }
        }

        true
    }

    fn flush(&self, current: &mut String, pieces: &mut Vec<String>) {
        let piece = std::mem::take(current);
        let trimmed = piece.trim();
        if !trimmed.is_empty() && trimmed.chars().count() >= self.min_sentence_chars {
            pieces.push(trimmed.to_string());
        }
    }
}

/// The alphabetic word immediately before position `i`.
fn preceding_word(chars: &[char], i: usize) -> String {
    chars[..i]
        .iter()
        .rev()
        .take_while(|c| c.is_alphabetic())
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}
