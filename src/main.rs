use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use obst_graph::pipeline::run_file;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "obst_graph",
    about = "Builds an optimal binary search tree over the keys of a graph file"
)]
struct Cli {
    /// Graph file; the matrix is also written next to it as `<name>_out.txt`.
    input: PathBuf,
}

fn main() -> Result<()> {
    // stdout carries the matrix, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = run_file(&cli.input)
        .with_context(|| format!("failed to process {}", cli.input.display()))?;

    tracing::info!(
        cost = report.optimal_cost,
        root = report.root_key.as_str(),
        "done"
    );
    Ok(())
}
