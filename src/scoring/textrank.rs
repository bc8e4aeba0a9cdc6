//! Graph-centrality sentence scoring (TextRank)
//!
//! Builds a token-overlap similarity graph over the sentence collection
//! and runs damped power iteration to rank sentences by centrality.
//! Non-convergence within the iteration cap degrades to the last computed
//! vector; it is never an error.

use tracing::debug;

use super::SentenceScorer;
use crate::graph::{CsrGraph, GraphBuilder};
use crate::pagerank::PageRank;
use crate::types::{Sentence, SummarizeConfig};

/// TextRank sentence scorer.
#[derive(Debug, Clone)]
pub struct TextRankScorer {
    /// Damping factor.
    pub damping: f64,
    /// Iteration cap.
    pub max_iterations: usize,
    /// L1 convergence tolerance.
    pub tolerance: f64,
}

impl Default for TextRankScorer {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl TextRankScorer {
    /// Create a scorer with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the ranking parameters from a pipeline config.
    pub fn from_config(config: &SummarizeConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl SentenceScorer for TextRankScorer {
    fn score(&self, sentences: &[Sentence]) -> Vec<f64> {
        let builder = GraphBuilder::from_sentences(sentences);
        let graph = CsrGraph::from_builder(&builder);

        let isolated = graph.isolated_nodes().len();
        if isolated > 0 {
            debug!(
                isolated,
                nodes = graph.num_nodes,
                "similarity graph has isolated sentences"
            );
        }

        let result = PageRank::new()
            .with_damping(self.damping)
            .with_max_iterations(self.max_iterations)
            .with_tolerance(self.tolerance)
            .run(&graph);

        if !result.converged {
            debug!(
                iterations = result.iterations,
                delta = result.delta,
                "ranking stopped at iteration cap; using last vector"
            );
        }

        result.scores
    }
}
