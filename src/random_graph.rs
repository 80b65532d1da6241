//!
//! seeded random graph primitives
//!
use crate::graph::Graph;
use rand::Rng;
use thiserror::Error;

///
/// invalid generation parameters, detected before any random draw
///
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("invalid parameter {name} = {value}: must be a probability within [0, 1]")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// check that `p` is a usable edge probability
pub fn check_probability(name: &'static str, p: f64) -> Result<(), GenerateError> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GenerateError::InvalidParameter { name, value: p })
    }
}

/// Erdős–Rényi random graph G(n, p) on vertices `0..n`.
///
/// Every unordered pair (i, j) with i < j is included independently with
/// probability `p`, drawing once from `rng` per pair in ascending (i, j)
/// order, so a given stream state always produces the same graph.
/// `p = 1.0` deterministically yields the complete graph. The parameter
/// check runs before the first draw, so a failed call leaves `rng`
/// untouched.
pub fn erdos_renyi<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<Graph<usize>, GenerateError> {
    check_probability("p", p)?;
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                edges.push((i, j));
            }
        }
    }
    let graph = Graph::from_parts(0..n, edges).expect("i < j pairs cannot form a self-loop");
    Ok(graph)
}

/// complete graph on vertices `0..n`, constructed without consuming
/// randomness
pub fn complete_graph(n: usize) -> Graph<usize> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    Graph::from_parts(0..n, edges).expect("i < j pairs cannot form a self-loop")
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use test_case::test_case;

    #[test]
    fn same_stream_state_gives_same_graph() {
        let mut rng_a = Xoshiro256PlusPlus::seed_from_u64(11);
        let mut rng_b = Xoshiro256PlusPlus::seed_from_u64(11);
        let a = erdos_renyi(20, 0.3, &mut rng_a).unwrap();
        let b = erdos_renyi(20, 0.3, &mut rng_b).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_edge_list_string(), b.to_edge_list_string());
    }

    #[test]
    fn p_zero_gives_no_edges_but_all_vertices() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let g = erdos_renyi(10, 0.0, &mut rng).unwrap();
        assert_eq!(g.n_vertices(), 10);
        assert_eq!(g.n_edges(), 0);
    }

    #[test]
    fn p_one_equals_complete_graph() {
        // two independent construction paths, required to agree exactly
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
        let random = erdos_renyi(8, 1.0, &mut rng).unwrap();
        let complete = complete_graph(8);
        assert_eq!(random, complete);
        assert_eq!(complete.n_edges(), 8 * 7 / 2);
    }

    #[test]
    fn complete_graph_small_cases() {
        assert_eq!(complete_graph(0).n_vertices(), 0);
        assert_eq!(complete_graph(0).n_edges(), 0);
        assert_eq!(complete_graph(1).n_vertices(), 1);
        assert_eq!(complete_graph(1).n_edges(), 0);
        let k4 = complete_graph(4);
        assert_eq!(k4.n_edges(), 6);
        assert!(k4.has_edge(&0, &3));
    }

    #[test_case(-0.1 ; "negative")]
    #[test_case(1.5 ; "above one")]
    #[test_case(f64::NAN ; "not a number")]
    #[test_case(f64::INFINITY ; "infinite")]
    fn bad_probability_is_rejected(p: f64) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let result = erdos_renyi(5, p, &mut rng);
        assert!(matches!(
            result,
            Err(GenerateError::InvalidParameter { name: "p", .. })
        ));
    }

    #[test]
    fn failed_call_leaves_the_stream_untouched() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        assert!(erdos_renyi(5, 2.0, &mut rng).is_err());
        let after_failure = erdos_renyi(10, 0.5, &mut rng).unwrap();

        let mut fresh = Xoshiro256PlusPlus::seed_from_u64(7);
        let from_fresh = erdos_renyi(10, 0.5, &mut fresh).unwrap();
        assert_eq!(after_failure, from_fresh);
    }

    #[test]
    fn edges_stay_in_vertex_range() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let g = erdos_renyi(15, 0.4, &mut rng).unwrap();
        for (u, v) in g.edges() {
            assert!(u < v);
            assert!(*v < 15);
        }
    }
}
