//!
//! connected components diagnostic
//!
//! Post-hoc inspection of generated or solved instances; not part of the
//! validation semantics.
//!
use crate::common::VertexId;
use crate::graph::Graph;
use petgraph::unionfind::UnionFind;
use std::collections::HashMap;

/// Sizes of the connected components of `g`, largest first.
///
/// Isolated vertices count as singleton components.
pub fn component_sizes<V: VertexId>(g: &Graph<V>) -> Vec<usize> {
    let index: HashMap<&V, usize> = g.vertices().enumerate().map(|(i, v)| (v, i)).collect();
    let mut uf: UnionFind<usize> = UnionFind::new(index.len());
    for (u, v) in g.edges() {
        uf.union(index[u], index[v]);
    }

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for i in 0..index.len() {
        *counts.entry(uf.find(i)).or_insert(0) += 1;
    }
    let mut sizes: Vec<usize> = counts.values().cloned().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes
}

//
// tests
//
