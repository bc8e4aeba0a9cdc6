//! Core types shared across the pipeline.
//!
//! Everything here is plain data: the pipeline stages communicate through
//! these types and never retain them across calls.

use serde::{Deserialize, Serialize};

/// Languages with bundled stopword and abbreviation resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Turkish,
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
}

impl Default for Language {
    fn default() -> Self {
        Language::Turkish
    }
}

impl Language {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "de" | "german" => Language::German,
            "fr" | "french" => Language::French,
            "es" | "spanish" => Language::Spanish,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ru" | "russian" => Language::Russian,
            _ => Language::Turkish,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Language::parse(value))
    }
}

/// Sentence scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Frequency-weighted term scoring.
    TfIdf,
    /// Graph-centrality ranking over a sentence similarity graph.
    TextRank,
}

impl Default for Method {
    fn default() -> Self {
        Method::TextRank
    }
}

impl Method {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tfidf" | "tf-idf" | "tf_idf" => Method::TfIdf,
            _ => Method::TextRank,
        }
    }
}

impl std::str::FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Method::parse(value))
    }
}

/// Configuration for the summarization pipeline.
///
/// The defaults reproduce the standard TextRank parameters (damping 0.85,
/// 100 iterations, 1e-6 tolerance) and Turkish-language preprocessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeConfig {
    /// Language used for stopword and abbreviation resources.
    pub language: Language,
    /// Extra stopwords merged into the built-in set.
    #[serde(default)]
    pub stopword_overrides: Vec<String>,
    /// Damping factor for the graph ranker.
    pub damping: f64,
    /// Iteration cap for the graph ranker.
    pub max_iterations: usize,
    /// L1 convergence tolerance for the graph ranker.
    pub tolerance: f64,
    /// Sentences shorter than this many characters are dropped at
    /// segmentation. Zero keeps everything.
    pub min_sentence_chars: usize,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            stopword_overrides: Vec::new(),
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            min_sentence_chars: 0,
        }
    }
}

impl SummarizeConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Merge extra stopwords into the built-in set.
    pub fn with_stopword_overrides<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopword_overrides = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the damping factor, clamped to (0, 1).
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping.clamp(f64::MIN_POSITIVE, 1.0);
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Drop sentences shorter than `chars` characters at segmentation.
    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }
}

/// A document to summarize. Read-only input; the pipeline never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Article title. May be empty.
    pub title: String,
    /// Raw body text.
    pub raw_text: String,
}

impl Document {
    pub fn new(title: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// One sentence of the source document.
///
/// `index` values are contiguous and strictly increasing in document order.
/// A sentence whose `tokens` are empty (all stopwords or no words) is
/// retained so index alignment with the original text is never broken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    /// 0-based position in the original document.
    pub index: usize,
    /// Verbatim sentence text.
    pub text: String,
    /// Lowercased tokens with punctuation, digit-only tokens, and
    /// stopwords removed.
    pub tokens: Vec<String>,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            tokens: Vec::new(),
        }
    }
}

/// A selected sentence with the score that earned its place.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredSentence {
    /// 0-based position in the original document.
    pub index: usize,
    /// Verbatim sentence text.
    pub text: String,
    /// Importance score assigned by the chosen strategy.
    pub score: f64,
}

/// The result of one summarization call.
///
/// Sentences are in ascending original-document order regardless of score
/// rank, so the summary reads coherently.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    /// Selected sentences in document order.
    pub sentences: Vec<ScoredSentence>,
    /// Total number of sentences detected in the document.
    pub sentence_count: usize,
    /// Character length of the summary over character length of the
    /// original text.
    pub compression_ratio: f64,
}

impl SummaryResult {
    /// The summary as a single string, sentences joined by a space.
    pub fn summary(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
