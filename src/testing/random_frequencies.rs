use crate::types::{KeyGraph, KeyNode};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// 1-indexed frequencies of `n` keys, each in `0..=max`.
pub fn random_frequencies(n: usize, max: u32, seed: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    std::iter::once(0)
        .chain((0..n).map(|_| rng.random_range(0..=max)))
        .collect()
}

/// Graph of `n` nodes with distinct keys inserted in shuffled order and no edges.
///
/// Keys are `K00`, `K01`, ... so that their sorted order is the numeric one.
pub fn random_key_graph(n: usize, max: u32, seed: usize) -> KeyGraph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);

    let mut graph = KeyGraph::with_capacity(n, n.saturating_sub(1));
    for i in order {
        let freq = rng.random_range(0..=max);
        graph.add_node(KeyNode::new(
            format!("K{i:02}"),
            format!("node{i}"),
            freq.to_string(),
        ));
    }
    graph
}
