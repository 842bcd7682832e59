use std::error::Error;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading a graph, building the tree or writing the matrix.
#[derive(Error, Debug)]
pub enum ObstError {
    /// Underlying read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input text does not follow the matrix format.
    #[error("line {line}: {message}")]
    Format {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// A node value is not a non-negative integer.
    #[error("frequency of key {key} is not a non-negative integer: {value:?}")]
    Frequency {
        /// Key whose value failed to parse.
        key: String,
        /// Raw value text.
        value: String,
    },

    /// No keys to build a tree from.
    #[error("graph has no nodes, there is no tree to build")]
    EmptyInput,

    /// Two nodes share the same key.
    #[error("duplicate key {0}")]
    DuplicateKey(String),

    /// More keys than the solver accepts.
    #[error("{count} keys given, at most {max} are supported")]
    TooManyKeys {
        /// Number of keys given.
        count: usize,
        /// Maximal number of keys.
        max: usize,
    },

    /// Root table does not describe a binary tree over all keys.
    #[error("malformed root table: {0}")]
    MalformedRootTable(String),

    /// Output path can't be derived from the input path.
    #[error("cannot derive output path from {0}")]
    OutputPath(PathBuf),
}

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}
