//! Similarity graph builder
//!
//! Builds an undirected weighted graph over sentences. The edge weight
//! between two sentences is the number of distinct tokens they share,
//! normalized by the sum of the logs of their token-set sizes. Sentences
//! with one token or fewer take weight 0 on every pair, which keeps the
//! log terms away from their singularities.

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::Sentence;

/// Above this many sentences, pairwise similarity is computed in parallel.
const PARALLEL_THRESHOLD: usize = 128;

/// A node in the graph builder.
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight.
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable graph builder over a fixed set of sentence nodes.
#[derive(Debug)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a builder with `n` nodes and no edges.
    pub fn with_node_count(n: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); n],
        }
    }

    /// Build the similarity graph for a sentence collection.
    ///
    /// One node per sentence, in index order. Deterministic: the parallel
    /// path partitions by row and merges partial results in row order.
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let token_sets: Vec<FxHashSet<&str>> = sentences
            .iter()
            .map(|s| s.tokens.iter().map(String::as_str).collect())
            .collect();

        let mut builder = Self::with_node_count(sentences.len());

        if sentences.len() < PARALLEL_THRESHOLD {
            for i in 0..token_sets.len() {
                for j in (i + 1)..token_sets.len() {
                    let weight = pair_weight(&token_sets[i], &token_sets[j]);
                    builder.set_edge(i as u32, j as u32, weight);
                }
            }
        } else {
            let rows: Vec<Vec<(u32, f64)>> = (0..token_sets.len())
                .into_par_iter()
                .map(|i| {
                    ((i + 1)..token_sets.len())
                        .filter_map(|j| {
                            let weight = pair_weight(&token_sets[i], &token_sets[j]);
                            (weight > 0.0).then_some((j as u32, weight))
                        })
                        .collect()
                })
                .collect();

            for (i, row) in rows.into_iter().enumerate() {
                for (j, weight) in row {
                    builder.set_edge(i as u32, j, weight);
                }
            }
        }

        builder
    }

    /// Set the weight of an undirected edge.
    ///
    /// Self-loops and non-positive weights are ignored.
    pub fn set_edge(&mut self, a: u32, b: u32, weight: f64) {
        if a == b || weight <= 0.0 {
            return;
        }
        if let Some(node) = self.nodes.get_mut(a as usize) {
            node.edges.insert(b, weight);
        }
        if let Some(node) = self.nodes.get_mut(b as usize) {
            node.edges.insert(a, weight);
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Iterate over all nodes in ID order.
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Token-overlap similarity between two sentences.
///
/// `|a ∩ b| / (ln|a| + ln|b|)`, or 0 when either set has one token or
/// fewer (ln 0 and ln 1 would be singular) or when nothing is shared.
fn pair_weight(a: &FxHashSet<&str>, b: &FxHashSet<&str>) -> f64 {
    if a.len() <= 1 || b.len() <= 1 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared = small.iter().filter(|t| large.contains(*t)).count();
    if shared == 0 {
        return 0.0;
    }

    shared as f64 / ((a.len() as f64).ln() + (b.len() as f64).ln())
}
