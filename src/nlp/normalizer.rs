//! Token normalization
//!
//! Turns raw sentence text into lowercase word tokens with punctuation
//! stripped and digit-only tokens removed. Stopword filtering is a separate
//! stage so the two concerns stay independently testable.

use crate::types::Language;

/// Normalize one sentence into matchable tokens.
///
/// Pure function: lowercases (with Turkish dotted/dotless-i handling),
/// strips punctuation inside words, and drops tokens that consist only of
/// digits. Apostrophe suffixes collapse into the word they attach to, so
/// `Türkiye'de` becomes `türkiyede`.
pub fn normalize(text: &str, language: Language) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let mut token = String::new();
            for ch in word.chars().filter(|c| c.is_alphanumeric()) {
                match (language, ch) {
                    // Turkish has a four-way i: I lowercases to dotless ı,
                    // İ lowercases to plain i.
                    (Language::Turkish, 'I') => token.push('ı'),
                    (Language::Turkish, 'İ') => token.push('i'),
                    _ => token.extend(ch.to_lowercase()),
                }
            }
            if token.is_empty() || token.chars().all(|c| c.is_numeric()) {
                None
            } else {
                Some(token)
            }
        })
        .collect()
}
