//!
//! plain edge-list graph format
//!
//! One edge per line as two whitespace-separated labels. Blank lines and
//! lines starting with `#` are ignored. The vertex set is the union of all
//! labels, so isolated vertices cannot be represented. Malformed lines are
//! rejected with their line number, never skipped.
//!
use super::ParseError;
use crate::graph::Graph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// read a graph file
pub fn parse_graph<P: AsRef<Path>>(path: P) -> Result<Graph<String>, ParseError> {
    let file = File::open(path)?;
    parse_graph_from_reader(BufReader::new(file))
}

/// parse edge-list text from any buffered reader
pub fn parse_graph_from_reader<R: BufRead>(reader: R) -> Result<Graph<String>, ParseError> {
    let mut edges: Vec<(String, String)> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(ParseError::MalformedEdgeLine {
                line: i + 1,
                content: line.to_string(),
            });
        }
        if tokens[0] == tokens[1] {
            return Err(ParseError::SelfLoop {
                line: i + 1,
                vertex: tokens[0].to_string(),
            });
        }
        edges.push((tokens[0].to_string(), tokens[1].to_string()));
    }
    let graph = Graph::from_edges(edges).expect("self-loops were rejected per line");
    Ok(graph)
}

//
// tests
//
