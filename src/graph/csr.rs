//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores edges contiguously, making iteration over neighbors fast.
//! The ranking loop repeatedly walks every edge, so this layout pays for
//! itself after the first iteration.

use super::builder::GraphBuilder;

/// The sentence similarity graph in Compressed Sparse Row format.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (sentences).
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1].
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge.
    pub col_idx: Vec<u32>,
    /// Edge weights.
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node.
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Convert a [`GraphBuilder`] into CSR format.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            // Sort edges for deterministic iteration.
            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node.
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Degree of a node.
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Total outgoing weight of a node.
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total number of edges (counting each undirected edge twice).
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes with no edges — sentences sharing no tokens with any other.
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}
