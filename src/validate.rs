//!
//! induced common subgraph mapping validator
//!
//! Decides whether a candidate mapping is a valid induced common subgraph
//! isomorphism between two graphs, and names the first violation otherwise.
//!
use crate::common::{GraphSide, VertexId};
use crate::graph::{canonical_edge, Graph};
use crate::mapping::Mapping;
use itertools::Itertools;
use std::collections::HashSet;
use thiserror::Error;

///
/// why a candidate mapping is not a valid induced common subgraph
/// isomorphism
///
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError<V: VertexId> {
    /// two sources map to the same target vertex
    #[error("mapping is not injective: two vertices are mapped to {target}")]
    NotInjective { target: V },
    /// a mapped vertex does not exist in the graph it should belong to
    #[error("vertex {vertex} is not in {graph}")]
    VertexNotFound { graph: GraphSide, vertex: V },
    /// a pair of entries whose edge presence differs between the graphs
    #[error(
        "induced condition violated: edge {g1_edge:?} in G1 = {g1_has}, edge {g2_edge:?} in G2 = {g2_has}"
    )]
    InducedViolation {
        g1_edge: (V, V),
        g1_has: bool,
        g2_edge: (V, V),
        g2_has: bool,
    },
}

/// Check that `mapping` is a valid induced common subgraph isomorphism
/// between `g1` and `g2`.
///
/// Three stages, each scanning the entries in their given sequence order
/// and stopping at the first failure:
///
/// 1. injectivity: no target vertex may be used twice
/// 2. membership: every source must exist in `g1`, every target in `g2`
/// 3. induced consistency: for every unordered pair of entries
///    `(u1 → v1)`, `(u2 → v2)`, the edge `{u1, u2}` is in `g1` iff
///    `{v1, v2}` is in `g2`
///
/// On success the mapping size is returned as the size of the common
/// induced subgraph. Mappings of size 0 or 1 pass vacuously. The whole
/// check is `O(k²)` edge lookups for a mapping of size `k`.
pub fn validate<V: VertexId>(
    g1: &Graph<V>,
    g2: &Graph<V>,
    mapping: &Mapping<V>,
) -> Result<usize, ValidationError<V>> {
    // (1) injectivity of the targets
    let mut seen: HashSet<&V> = HashSet::with_capacity(mapping.len());
    for (_, v) in mapping.iter() {
        if !seen.insert(v) {
            return Err(ValidationError::NotInjective { target: v.clone() });
        }
    }

    // (2) both endpoints of every pair exist in their graphs
    for (u, v) in mapping.iter() {
        if !g1.has_vertex(u) {
            return Err(ValidationError::VertexNotFound {
                graph: GraphSide::G1,
                vertex: u.clone(),
            });
        }
        if !g2.has_vertex(v) {
            return Err(ValidationError::VertexNotFound {
                graph: GraphSide::G2,
                vertex: v.clone(),
            });
        }
    }

    // (3) edge presence must agree for every pair of distinct entries
    for ((u1, v1), (u2, v2)) in mapping.iter().tuple_combinations() {
        let g1_edge = canonical_edge(u1.clone(), u2.clone());
        let g2_edge = canonical_edge(v1.clone(), v2.clone());
        let g1_has = g1.has_edge(&g1_edge.0, &g1_edge.1);
        let g2_has = g2.has_edge(&g2_edge.0, &g2_edge.1);
        if g1_has != g2_has {
            return Err(ValidationError::InducedViolation {
                g1_edge,
                g1_has,
                g2_edge,
                g2_has,
            });
        }
    }

    Ok(mapping.len())
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    fn s(x: &str) -> String {
        x.to_string()
    }

    /// G1: a-b-c path, G2: x-y-z path
    fn paths() -> (Graph<String>, Graph<String>) {
        let g1 = Graph::from_edges(vec![(s("a"), s("b")), (s("b"), s("c"))]).unwrap();
        let g2 = Graph::from_edges(vec![(s("x"), s("y")), (s("y"), s("z"))]).unwrap();
        (g1, g2)
    }

    #[test]
    fn empty_mapping_is_valid() {
        let (g1, g2) = paths();
        let m = Mapping::new();
        assert_eq!(validate(&g1, &g2, &m), Ok(0));
    }

    #[test]
    fn single_pair_is_valid() {
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![(s("a"), s("z"))]);
        assert_eq!(validate(&g1, &g2, &m), Ok(1));
    }

    #[test]
    fn path_onto_path_is_valid() {
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![(s("a"), s("x")), (s("b"), s("y")), (s("c"), s("z"))]);
        assert_eq!(validate(&g1, &g2, &m), Ok(3));
    }

    #[test]
    fn twisted_path_violates_induced_condition() {
        // {a,b} is an edge of G1 but its image {x,z} is not an edge of G2,
        // so the very first scanned pair fails
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![(s("a"), s("x")), (s("b"), s("z")), (s("c"), s("y"))]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::InducedViolation {
                g1_edge: (s("a"), s("b")),
                g1_has: true,
                g2_edge: (s("x"), s("z")),
                g2_has: false,
            })
        );
    }

    #[test]
    fn missing_edge_on_g1_side_also_violates() {
        // {a,c} is not an edge of G1 but its image {x,y} is one in G2
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![(s("a"), s("x")), (s("c"), s("y"))]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::InducedViolation {
                g1_edge: (s("a"), s("c")),
                g1_has: false,
                g2_edge: (s("x"), s("y")),
                g2_has: true,
            })
        );
    }

    #[test]
    fn repeated_target_is_not_injective() {
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![(s("a"), s("x")), (s("b"), s("x"))]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::NotInjective { target: s("x") })
        );
    }

    #[test]
    fn unknown_source_vertex_names_g1() {
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![(s("a"), s("x")), (s("q"), s("y"))]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::VertexNotFound {
                graph: GraphSide::G1,
                vertex: s("q"),
            })
        );
    }

    #[test]
    fn unknown_target_vertex_names_g2() {
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![(s("a"), s("x")), (s("b"), s("w"))]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::VertexNotFound {
                graph: GraphSide::G2,
                vertex: s("w"),
            })
        );
    }

    #[test]
    fn injectivity_is_checked_before_membership() {
        // the mapping both repeats a target and names an unknown vertex;
        // the stage order makes NotInjective win
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![
            (s("q"), s("x")),
            (s("a"), s("x")),
            (s("b"), s("y")),
        ]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::NotInjective { target: s("x") })
        );
    }

    #[test]
    fn membership_is_checked_before_induced_condition() {
        // entries 1 and 2 already disagree on edge presence, but entry 3
        // names an unknown target and membership runs first
        let (g1, g2) = paths();
        let m = Mapping::from_pairs(vec![
            (s("a"), s("x")),
            (s("b"), s("z")),
            (s("c"), s("w")),
        ]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::VertexNotFound {
                graph: GraphSide::G2,
                vertex: s("w"),
            })
        );
    }

    #[test]
    fn first_violation_is_deterministic() {
        // two violating pairs; the scan order (positions 0,1 before 0,2)
        // fixes which one is reported
        let g1 = Graph::from_edges(vec![(s("a"), s("b")), (s("a"), s("c"))]).unwrap();
        let g2 = Graph::from_parts(vec![s("x"), s("y"), s("z")], vec![]).unwrap();
        let m = Mapping::from_pairs(vec![(s("a"), s("x")), (s("b"), s("y")), (s("c"), s("z"))]);
        assert_eq!(
            validate(&g1, &g2, &m),
            Err(ValidationError::InducedViolation {
                g1_edge: (s("a"), s("b")),
                g1_has: true,
                g2_edge: (s("x"), s("y")),
                g2_has: false,
            })
        );
    }

    #[test]
    fn error_messages_name_the_defect() {
        assert_eq!(
            ValidationError::VertexNotFound {
                graph: GraphSide::G1,
                vertex: s("q"),
            }
            .to_string(),
            "vertex q is not in G1"
        );
        assert_eq!(
            ValidationError::NotInjective { target: s("x") }.to_string(),
            "mapping is not injective: two vertices are mapped to x"
        );
    }
}
