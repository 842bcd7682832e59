use crate::error::ObstError;
use crate::types::KeyGraph;
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes the adjacency matrix of `graph`.
///
/// First line is `~ val` followed by the keys of `cols`. Then, for every node of `rows`,
/// its name, its value and for every column `1` if there is an edge from the row node
/// to the column node and `~` otherwise.
///
/// Example output for keys A:10, B:5, C:20 after the tree was built:
/// ```text
/// ~ val A B C
/// Alpha 10 ~ 1 ~
/// Beta 5 ~ ~ ~
/// Gamma 20 1 ~ ~
/// ```
pub fn render_matrix<W: Write>(
    graph: &KeyGraph,
    rows: &[NodeIndex],
    cols: &[NodeIndex],
    mut writer: W,
) -> io::Result<()> {
    let mut header = String::from("~ val");
    for &c in cols {
        header.push(' ');
        header.push_str(&graph[c].abbrev);
    }
    writeln!(writer, "{header}")?;

    let edges: HashSet<(NodeIndex, NodeIndex)> = graph
        .edge_references()
        .map(|e| (e.source(), e.target()))
        .collect();

    for &r in rows {
        let node = &graph[r];
        let mut line = format!("{} {}", node.name, node.val);
        for &c in cols {
            line.push_str(if edges.contains(&(r, c)) { " 1" } else { " ~" });
        }
        writeln!(writer, "{line}")?;
    }

    writer.flush()
}

/// This is equivalent to [`render_matrix`], but returns the matrix as a string.
pub fn draw_matrix(graph: &KeyGraph, rows: &[NodeIndex], cols: &[NodeIndex]) -> String {
    let mut buffer = Vec::new();
    render_matrix(graph, rows, cols, &mut buffer).expect("Writing to a Vec should not fail");
    String::from_utf8(buffer).expect("Keys and names are valid UTF-8")
}

/// Writer forwarding everything to two writers, e.g. stdout and the output file.
#[derive(Debug)]
pub struct DualSink<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> DualSink<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Write, B: Write> Write for DualSink<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // both sides always receive the whole buffer
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}

/// Output file for `input`: the last 4 characters of the file name (the
/// extension, e.g. `.txt`) are replaced by `_out.txt`. The directory part is
/// kept as is, so it may hold any bytes the platform allows.
///
/// A file name that is not valid unicode is accepted only when it ends in a
/// 3 byte ASCII extension, which is then the part replaced.
pub fn output_path_for(input: &Path) -> Result<PathBuf, ObstError> {
    let invalid = || ObstError::OutputPath(input.to_path_buf());
    let file_name = input.file_name().ok_or_else(invalid)?;

    let mut out_name = match file_name.to_str() {
        Some(text) => {
            let cut = text
                .char_indices()
                .rev()
                .nth(3)
                .map(|(idx, _)| idx)
                .ok_or_else(invalid)?;
            OsString::from(&text[..cut])
        }
        None => match input.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.len() == 3 && ext.is_ascii() => {
                input.file_stem().ok_or_else(invalid)?.to_os_string()
            }
            _ => return Err(invalid()),
        },
    };
    out_name.push("_out.txt");
    Ok(input.with_file_name(out_name))
}
