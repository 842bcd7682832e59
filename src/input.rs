use crate::error::ObstError;
use crate::types::{KeyGraph, KeyNode};
use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

/// Reads a graph from a file.
///
/// Keyed graph input, whitespace separated:
/// - header line `~ val` followed by the key of every node,
/// - then one line per node, in header order: name, value, and one cell per
///   header key, `~` for no edge or the weight of the edge from this node to that key.
///
/// <div class="warning">
///
/// > Keys must be unique.
/// > Names and values can't contain whitespace.
///
/// </div>
///
/// Example input:
/// ```text
/// ~ val A B C
/// Alpha 10 ~ ~ ~
/// Beta 5 ~ ~ ~
/// Gamma 20 ~ ~ ~
/// ```
pub fn from_file(path: impl AsRef<Path>) -> Result<KeyGraph, ObstError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_graph_from_matrix_format(reader)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str) -> Result<KeyGraph, ObstError> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_graph_from_matrix_format(reader)
}

struct Row {
    name: String,
    val: String,
    cells: Vec<Option<u32>>,
}

fn format_error(line: usize, message: impl Into<String>) -> ObstError {
    ObstError::Format {
        line,
        message: message.into(),
    }
}

fn parse_graph_from_matrix_format<R: BufRead>(reader: R) -> Result<KeyGraph, ObstError> {
    let mut keys: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        last_line = idx + 1;
        let tokens: Vec<_> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        match keys.as_ref().map(Vec::len) {
            None => keys = Some(parse_header(last_line, &tokens)?),
            Some(columns) => rows.push(parse_row(last_line, &tokens, columns)?),
        }
    }

    let keys = keys.ok_or_else(|| format_error(last_line.max(1), "no header found"))?;
    if rows.len() != keys.len() {
        return Err(format_error(
            last_line,
            format!("expected {} rows, found {}", keys.len(), rows.len()),
        ));
    }

    let mut graph = KeyGraph::with_capacity(keys.len(), 0);
    let nodes: Vec<_> = keys
        .into_iter()
        .zip(rows.iter())
        .map(|(key, row)| graph.add_node(KeyNode::new(key, row.name.clone(), row.val.clone())))
        .collect();

    for (u, row) in rows.iter().enumerate() {
        for (v, cell) in row.cells.iter().enumerate() {
            if let Some(weight) = cell {
                graph.add_edge(nodes[u], nodes[v], *weight);
            }
        }
    }

    Ok(graph)
}

fn parse_header(line: usize, tokens: &[&str]) -> Result<Vec<String>, ObstError> {
    if tokens.len() < 2 || tokens[0] != "~" || tokens[1] != "val" {
        return Err(format_error(line, "header should start with `~ val`"));
    }
    let mut seen = HashSet::with_capacity(tokens.len() - 2);
    for key in &tokens[2..] {
        if !seen.insert(*key) {
            return Err(ObstError::DuplicateKey(key.to_string()));
        }
    }
    Ok(tokens[2..].iter().map(|k| k.to_string()).collect())
}

fn parse_row(line: usize, tokens: &[&str], columns: usize) -> Result<Row, ObstError> {
    if tokens.len() != columns + 2 {
        return Err(format_error(
            line,
            format!(
                "expected name, value and {} cells, found {} tokens",
                columns,
                tokens.len()
            ),
        ));
    }
    let cells = tokens[2..]
        .iter()
        .map(|cell| match *cell {
            "~" => Ok(None),
            weight => weight
                .parse()
                .map(Some)
                .map_err(|_| format_error(line, format!("invalid edge weight {weight:?}"))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Row {
        name: tokens[0].to_string(),
        val: tokens[1].to_string(),
        cells,
    })
}
