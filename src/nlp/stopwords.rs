//! Stopword filtering
//!
//! This module provides multi-language stopword filtering using the
//! `stop-words` crate as the linguistic base, merged with a bundled
//! news-domain supplement for Turkish and optional caller overrides.
//! The filter is built once per summarizer and shared read-only across
//! calls.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::Language;

/// Function words that dominate Turkish news prose but are missing from or
/// underrepresented in the general-purpose list.
const TURKISH_NEWS_SUPPLEMENT: &[&str] = &[
    "ve", "veya", "ama", "ile", "bu", "şu", "o", "bir", "için", "de", "da", "ki", "mi", "mı",
    "mu", "mü", "gibi", "kadar", "daha", "çok", "az", "her", "hiç", "en", "ne", "olan", "olarak",
    "edildi", "yapıldı", "göre", "sonra", "önce", "ancak", "fakat", "lakin", "yani", "çünkü",
    "eğer", "ise", "hem", "ya", "diye", "üzere", "karşı", "rağmen", "doğru", "beri", "itibaren",
    "arasında", "içinde", "dışında", "üzerinde", "altında", "ben", "sen", "biz", "siz", "onlar",
    "var", "yok", "değil", "bile", "sadece", "artık", "henüz",
];

/// A filter for removing stopwords from normalized token sequences.
///
/// Tokens are expected to be lowercased already (the normalizer's output);
/// the stored set is lowercase.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in resources for a language.
    pub fn for_language(language: Language) -> Self {
        let mut words: FxHashSet<String> = get(stopword_language(language))
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        if language == Language::Turkish {
            words.extend(TURKISH_NEWS_SUPPLEMENT.iter().map(|s| s.to_string()));
        }

        Self { words }
    }

    /// Create an empty filter (no filtering).
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Add words to the filter.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Remove stopwords from a token sequence, preserving order.
    ///
    /// A sequence that is entirely stopwords yields an empty vector; the
    /// owning sentence is retained downstream so index alignment holds.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.words.contains(t))
            .collect()
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the filter is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn stopword_language(language: Language) -> LANGUAGE {
    match language {
        Language::Turkish => LANGUAGE::Turkish,
        Language::English => LANGUAGE::English,
        Language::German => LANGUAGE::German,
        Language::French => LANGUAGE::French,
        Language::Spanish => LANGUAGE::Spanish,
        Language::Italian => LANGUAGE::Italian,
        Language::Portuguese => LANGUAGE::Portuguese,
        Language::Dutch => LANGUAGE::Dutch,
        Language::Russian => LANGUAGE::Russian,
    }
}
