//! Whole run: read the graph, build the optimal tree into it and print the matrix.

use crate::error::{InvariantCheck, ObstError};
use crate::input::from_file;
use crate::keys::{KeyFrequencies, column_nodes, row_nodes};
use crate::obst::solve;
use crate::output::{DualSink, output_path_for, render_matrix};
use crate::tree_builder::build_tree;
use crate::types::KeyGraph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstReport {
    /// Weighted search cost of the built tree.
    pub optimal_cost: u64,
    /// Key of the tree root.
    pub root_key: String,
    /// Number of parent to child edges added to the graph.
    pub edges_added: usize,
    /// File the matrix was written to, if any.
    pub output: Option<PathBuf>,
}

/// Builds the optimal tree into `graph` and writes its matrix to `writer`.
///
/// Nothing is written unless the tree was built successfully. The matrix is
/// rendered in memory first and handed to `writer` in a single `write_all`, so a
/// [`DualSink`] either receives the whole matrix or, if its first side fails,
/// leaves the second side untouched.
pub fn run_graph<W: Write>(
    graph: &mut KeyGraph,
    mut writer: W,
) -> Result<ObstReport, ObstError> {
    let rows = row_nodes(graph);
    let cols = column_nodes(graph);

    let kf = KeyFrequencies::from_nodes(graph, &cols)?;
    let tables = solve(&kf)?;
    tables.is_correct()?;

    let added = build_tree(graph, &cols, &tables);
    let root_key = kf.key(tables.root_index()).to_string();
    info!(
        keys = kf.len(),
        cost = tables.optimal_cost(),
        root = root_key.as_str(),
        edges = added.len(),
        "built optimal binary search tree"
    );

    let mut buffer = Vec::new();
    render_matrix(graph, &rows, &cols, &mut buffer)?;
    writer.write_all(&buffer)?;
    writer.flush()?;

    Ok(ObstReport {
        optimal_cost: tables.optimal_cost(),
        root_key,
        edges_added: added.len(),
        output: None,
    })
}

/// Runs on the graph stored in `input`, printing the matrix to stdout and to the
/// derived `_out.txt` file.
///
/// The output file is created (and truncated) before anything is computed, so an
/// unwritable destination fails the run early. If a later step fails, including a
/// failed write to stdout, the file stays empty.
pub fn run_file(input: &Path) -> Result<ObstReport, ObstError> {
    let output_path = output_path_for(input)?;
    let file = File::create(&output_path)?;
    info!(input = %input.display(), output = %output_path.display(), "starting run");

    let mut graph = from_file(input)?;
    let stdout = std::io::stdout().lock();
    let sink = DualSink::new(stdout, BufWriter::new(file));

    let mut report = run_graph(&mut graph, sink)?;
    report.output = Some(output_path);
    Ok(report)
}
