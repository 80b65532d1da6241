//!
//! text file boundary: edge-list graphs and solver mapping files
//!
pub mod edge_list;
pub mod mapping_file;

use thiserror::Error;

///
/// failure while reading one of the boundary text formats
///
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// a non-comment graph line that is not exactly two labels
    #[error("line {line}: expected two vertex labels: {content:?}")]
    MalformedEdgeLine { line: usize, content: String },
    /// a graph line naming the same label twice
    #[error("line {line}: self-loop edge on {vertex}")]
    SelfLoop { line: usize, vertex: String },
}
