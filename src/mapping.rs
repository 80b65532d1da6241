//!
//! partial vertex mapping from G1 to G2, as produced by an external solver
//!
use crate::common::VertexId;

/// Ordered collection of `(source, target)` pairs.
///
/// Entries keep their first-insertion order; inserting a source that is
/// already present replaces its target in place, so the sources are unique
/// and the mapping is a partial function by construction. Injectivity of
/// the targets is a property the validator checks, not an invariant of
/// this container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping<V> {
    pairs: Vec<(V, V)>,
}

impl<V: VertexId> Mapping<V> {
    pub fn new() -> Self {
        Mapping { pairs: Vec::new() }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut mapping = Self::new();
        for (u, v) in pairs {
            mapping.insert(u, v);
        }
        mapping
    }

    /// insert `u → v`, replacing the image of `u` in place if present
    pub fn insert(&mut self, u: V, v: V) {
        match self.pairs.iter().position(|(source, _)| *source == u) {
            Some(i) => self.pairs[i].1 = v,
            None => self.pairs.push((u, v)),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(V, V)] {
        &self.pairs
    }

    /// entries in their given sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, (V, V)> {
        self.pairs.iter()
    }

    /// relabel both sides through `f` (labels of graph files, for example)
    pub fn relabel<W, F>(&self, f: F) -> Mapping<W>
    where
        W: VertexId,
        F: Fn(&V) -> W,
    {
        Mapping {
            pairs: self.pairs.iter().map(|(u, v)| (f(u), f(v))).collect(),
        }
    }

    /// mapping text format: one `source → target` line per entry
    pub fn to_mapping_writer<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        for (u, v) in self.pairs.iter() {
            writeln!(writer, "{} → {}", u, v)?;
        }
        Ok(())
    }

    ///
    /// create mapping string with `to_mapping_writer`
    ///
    pub fn to_mapping_string(&self) -> String {
        let mut writer = Vec::with_capacity(128);
        self.to_mapping_writer(&mut writer).unwrap();
        String::from_utf8(writer).unwrap()
    }

    ///
    /// create mapping file with `to_mapping_writer`
    ///
    pub fn to_mapping_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_mapping_writer(file)
    }
}

impl<V: VertexId> Default for Mapping<V> {
    fn default() -> Self {
        Self::new()
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_kept() {
        let m = Mapping::from_pairs(vec![(3, 30), (1, 10), (2, 20)]);
        assert_eq!(m.pairs(), &[(3, 30), (1, 10), (2, 20)]);
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn duplicate_source_replaces_in_place() {
        let m = Mapping::from_pairs(vec![(1, 10), (2, 20), (1, 11)]);
        assert_eq!(m.pairs(), &[(1, 11), (2, 20)]);
    }

    #[test]
    fn empty_mapping() {
        let m: Mapping<usize> = Mapping::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn mapping_string_uses_arrow_lines() {
        let m = Mapping::from_pairs(vec![
            ("a".to_string(), "x".to_string()),
            ("b".to_string(), "y".to_string()),
        ]);
        assert_eq!(m.to_mapping_string(), "a → x\nb → y\n");
    }
}
