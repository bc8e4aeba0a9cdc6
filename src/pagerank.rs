//! Iterative centrality ranking
//!
//! Power iteration over the sentence similarity graph. Nodes with zero
//! total outgoing weight (isolated sentences) simply contribute nothing to
//! their neighbors; their mass is not redistributed, so no division by
//! zero can occur anywhere in the loop. Hitting the iteration cap is not
//! an error — the last computed vector is returned with `converged=false`.

use crate::graph::CsrGraph;

/// Power-iteration ranker with damping.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85).
    pub damping: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// L1 convergence tolerance.
    pub tolerance: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PageRank {
    /// Create a ranker with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Run the ranking iteration on a graph.
    ///
    /// Scores start uniform at `1/n`. Each iteration computes
    /// `score(i) = (1-d)/n + d * Σ_j w(i,j)/W(j) * score(j)` over the
    /// incoming edges of `i`, where `W(j)` is node j's total weight.
    /// Returns the result even if convergence wasn't achieved, with
    /// `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult {
                scores: vec![],
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.tolerance {
            iterations += 1;

            new_scores.fill(teleport);

            // Push each node's mass along its edges. Isolated nodes have
            // zero total weight and push nothing.
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            // L1 convergence delta.
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        PageRankResult {
            scores,
            iterations,
            delta,
            converged: delta <= self.tolerance,
        }
    }
}

/// Result of a ranking computation.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node, indexed by sentence position.
    pub scores: Vec<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final convergence delta.
    pub delta: f64,
    /// Whether the iteration converged within the cap.
    pub converged: bool,
}
