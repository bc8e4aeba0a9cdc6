//! Natural language preprocessing
//!
//! This module provides sentence segmentation, token normalization,
//! stopword filtering, and article noise cleaning.

pub mod cleaner;
pub mod normalizer;
pub mod segmenter;
pub mod stopwords;
