use petgraph::Direction;
use petgraph::graph::NodeIndex;

/// A keyed record stored as a node weight.
///
/// `val` is kept as the raw text read from the input, it becomes an access
/// frequency only when the keys are extracted for the solver.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeyNode {
    /// Short unique key, used for ordering and as column header.
    pub abbrev: String,
    /// Display name, printed at the start of each matrix row.
    pub name: String,
    /// Access frequency as text.
    pub val: String,
}

impl KeyNode {
    pub fn new(
        abbrev: impl Into<String>,
        name: impl Into<String>,
        val: impl Into<String>,
    ) -> Self {
        Self {
            abbrev: abbrev.into(),
            name: name.into(),
            val: val.into(),
        }
    }
}

impl std::fmt::Display for KeyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}={})", self.name, self.abbrev, self.val)
    }
}

/// Weight of every parent to child edge added by the tree builder.
pub const TREE_EDGE_WEIGHT: u32 = 1;

/// Wrapper for petgraph's directed graph type.
///
/// Edge weights are plain integers; tree edges carry [`TREE_EDGE_WEIGHT`].
pub type KeyGraph = petgraph::graph::DiGraph<KeyNode, u32>;

/// Keys of the direct successors of `node`, in edge insertion order.
///
/// Outgoing adjacency is always read from the graph, nodes don't keep their own edge lists.
pub fn outgoing_keys(graph: &KeyGraph, node: NodeIndex) -> Vec<&str> {
    let mut keys: Vec<&str> = graph
        .neighbors_directed(node, Direction::Outgoing)
        .map(|n| graph[n].abbrev.as_str())
        .collect();
    // petgraph walks the adjacency list newest first
    keys.reverse();
    keys
}
