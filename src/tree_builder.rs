use crate::obst::ObstTables;
use crate::types::{KeyGraph, TREE_EDGE_WEIGHT};
use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::debug;

/// Parent to child pairs of the tree encoded by `tables`, as 1-based key indices.
///
/// Pairs come in the order the tree is walked: the edge to the left child and
/// the whole left subtree precede the edge to the right child.
pub fn tree_edges(tables: &ObstTables) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(tables.n().saturating_sub(1));
    collect(tables, 1, tables.n(), &mut edges);
    edges
}

/// Recursion depth is bounded by the height of the tree.
fn collect(tables: &ObstTables, i: usize, j: usize, edges: &mut Vec<(usize, usize)>) {
    if i > j {
        return;
    }
    let k = tables.root(i, j);

    if i < k {
        edges.push((k, tables.root(i, k - 1)));
        collect(tables, i, k - 1, edges);
    }
    if k < j {
        edges.push((k, tables.root(k + 1, j)));
        collect(tables, k + 1, j, edges);
    }
}

/// Adds the tree encoded by `tables` to `graph`.
///
/// `cols` maps key index `i` to node `cols[i - 1]`, so it must be the key-sorted
/// order the tables were computed for. Every parent to child relation becomes one
/// edge of weight [`TREE_EDGE_WEIGHT`]. Returns the new edges in insertion order.
pub fn build_tree(
    graph: &mut KeyGraph,
    cols: &[NodeIndex],
    tables: &ObstTables,
) -> Vec<EdgeIndex> {
    debug_assert_eq!(cols.len(), tables.n());
    tree_edges(tables)
        .into_iter()
        .map(|(parent, child)| {
            let (tail, head) = (cols[parent - 1], cols[child - 1]);
            debug!(
                parent = graph[tail].abbrev.as_str(),
                child = graph[head].abbrev.as_str(),
                "adding tree edge"
            );
            graph.add_edge(tail, head, TREE_EDGE_WEIGHT)
        })
        .collect()
}
