//! Error types for the summarization pipeline.
//!
//! The taxonomy is deliberately small: segmentation and request validation
//! are the only fatal conditions. Numerical edge cases (empty sentences,
//! isolated graph nodes, non-convergence) degrade to zero scores or
//! best-effort rankings instead of raising.

use thiserror::Error;

/// Errors produced by the summarization pipeline.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The input text contained no usable sentences after segmentation.
    #[error("no sentences found in input text")]
    EmptyInput,

    /// The requested summary is incompatible with the sentence collection.
    #[error("invalid summary request: {0}")]
    InvalidRequest(String),
}
