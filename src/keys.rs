//! Extraction of sorted keys and their access frequencies from a graph.
//!
//! The solver works on plain 1-indexed slices. Index `i` of [`KeyFrequencies`]
//! corresponds to `cols[i - 1]`, where `cols` is the key-sorted node order
//! returned by [`column_nodes`].

use crate::error::ObstError;
use crate::types::KeyGraph;
use petgraph::graph::NodeIndex;

/// Node indices in insertion order, i.e. the order of the input file.
pub fn row_nodes(graph: &KeyGraph) -> Vec<NodeIndex> {
    graph.node_indices().collect()
}

/// Node indices sorted by key.
///
/// Sorting is stable, so equal keys keep their input order (they are rejected later anyway).
pub fn column_nodes(graph: &KeyGraph) -> Vec<NodeIndex> {
    let mut cols = row_nodes(graph);
    cols.sort_by(|&a, &b| graph[a].abbrev.cmp(&graph[b].abbrev));
    cols
}

/// Parallel 1-indexed key and frequency sequences, slot 0 is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFrequencies {
    keys: Vec<String>,
    freqs: Vec<u32>,
}

impl KeyFrequencies {
    /// Reads keys and frequencies of `cols` in the given order.
    ///
    /// `cols` should be sorted by key, see [`column_nodes`].
    pub fn from_nodes(graph: &KeyGraph, cols: &[NodeIndex]) -> Result<Self, ObstError> {
        if cols.is_empty() {
            return Err(ObstError::EmptyInput);
        }

        let mut keys = Vec::with_capacity(cols.len() + 1);
        let mut freqs = Vec::with_capacity(cols.len() + 1);
        keys.push(String::new());
        freqs.push(0);

        for &idx in cols {
            let node = &graph[idx];
            let freq = node
                .val
                .trim()
                .parse::<u32>()
                .map_err(|_| ObstError::Frequency {
                    key: node.abbrev.clone(),
                    value: node.val.clone(),
                })?;
            keys.push(node.abbrev.clone());
            freqs.push(freq);
        }

        if let Some(pair) = keys[1..].windows(2).find(|w| w[0] == w[1]) {
            return Err(ObstError::DuplicateKey(pair[0].clone()));
        }

        Ok(Self { keys, freqs })
    }

    /// Number of keys `n`.
    pub fn len(&self) -> usize {
        self.keys.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys, index 0 unused.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Frequencies, index 0 unused.
    pub fn freqs(&self) -> &[u32] {
        &self.freqs
    }

    /// Key at 1-based index `i`.
    pub fn key(&self, i: usize) -> &str {
        &self.keys[i]
    }
}
