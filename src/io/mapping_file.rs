//!
//! solver output mapping format
//!
//! Each mapping line is `source → target`. Blank lines and lines without
//! the arrow separator are ignored, so solver logs interleaved with the
//! mapping do not break parsing. Surrounding whitespace on either side of
//! the arrow is trimmed.
//!
use super::ParseError;
use crate::mapping::Mapping;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// read a mapping file
pub fn parse_mapping<P: AsRef<Path>>(path: P) -> Result<Mapping<String>, ParseError> {
    let file = File::open(path)?;
    parse_mapping_from_reader(BufReader::new(file))
}

/// parse mapping text from any buffered reader
pub fn parse_mapping_from_reader<R: BufRead>(reader: R) -> Result<Mapping<String>, ParseError> {
    let mut mapping = Mapping::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((u, v)) = line.split_once('→') {
            mapping.insert(u.trim().to_string(), v.trim().to_string());
        }
    }
    Ok(mapping)
}

//
// tests
//
