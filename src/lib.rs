//! # obst_graph
//!
//! Builds an optimal binary search tree over the keys of a graph and writes it
//! back into the graph as parent to child edges.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! Every node carries a key and an access frequency. Keys are sorted, the
//! frequencies are fed to the classic O(n^3) interval dynamic program, and the
//! resulting root table is walked to add one edge per parent to child relation.
//! Finally the graph is printed as an adjacency matrix.
//!
//! ```
//! use obst_graph::input::from_str;
//! use obst_graph::pipeline::run_graph;
//!
//! let input = "~ val A B C\nAlpha 10 ~ ~ ~\nBeta 5 ~ ~ ~\nGamma 20 ~ ~ ~\n";
//! let mut graph = from_str(input).unwrap();
//! let mut out = Vec::new();
//! let report = run_graph(&mut graph, &mut out).unwrap();
//! assert_eq!(report.root_key, "C");
//! assert_eq!(report.optimal_cost, 55);
//! ```

pub mod error;
pub mod input;
pub mod keys;
pub mod obst;
pub mod output;
pub mod pipeline;
pub mod tree_builder;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::ObstError;
pub use types::KeyGraph;
pub use types::KeyNode;
