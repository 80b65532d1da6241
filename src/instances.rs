//!
//! benchmark instance families with ground truth embedded by construction
//!
//! * `isomorphic_pair`
//! * `complete_vs_sparse`
//! * `common_core_with_noise`
//!
//! Every family owns its random stream: it validates its parameters, seeds
//! a fresh `Xoshiro256PlusPlus`, and never shares stream state with other
//! calls, so the same seed always reproduces the same pair byte for byte.
//!
use crate::graph::Graph;
use crate::mapping::Mapping;
use crate::random_graph::{check_probability, complete_graph, erdos_renyi, GenerateError};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

/// A random graph and a uniformly permuted copy of it.
///
/// ## Parameters
///
/// * n: vertex count of both graphs
/// * p: edge probability of the first graph
/// * seed: seed of the graph and of the permutation
///
/// Returns `(g1, g2, truth)` where `g2` is `g1` relabeled through a random
/// permutation π and `truth` is the full mapping `i → π(i)`. Since π is an
/// isomorphism on all n vertices, `truth` is the maximum common induced
/// subgraph of the pair.
pub fn isomorphic_pair(
    n: usize,
    p: f64,
    seed: u64,
) -> Result<(Graph<usize>, Graph<usize>, Mapping<usize>), GenerateError> {
    check_probability("p", p)?;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let g1 = erdos_renyi(n, p, &mut rng)?;
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut rng);
    let g2 = g1.relabel(|&u| perm[u]);
    let truth = Mapping::from_pairs((0..n).map(|u| (u, perm[u])));
    Ok((g1, g2, truth))
}

/// A clique against an unrelated sparse graph.
///
/// ## Parameters
///
/// * clique_size: vertex count of the complete first graph
/// * sparse_size: vertex count of the random second graph
/// * p_sparse: edge probability of the second graph
/// * seed: seed of the sparse graph
///
/// No relationship is engineered between the two graphs; the pair stresses
/// a solver's behavior when the common substructure is small or empty.
pub fn complete_vs_sparse(
    clique_size: usize,
    sparse_size: usize,
    p_sparse: f64,
    seed: u64,
) -> Result<(Graph<usize>, Graph<usize>), GenerateError> {
    check_probability("p_sparse", p_sparse)?;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let g1 = complete_graph(clique_size);
    let g2 = erdos_renyi(sparse_size, p_sparse, &mut rng)?;
    Ok((g1, g2))
}

/// Two graphs sharing an identical induced core.
///
/// ## Parameters
///
/// * core_size: vertex count of the shared core
/// * extra1, extra2: vertex counts of the per-graph noise parts
/// * p_core: edge probability inside the core
/// * p_noise: edge probability inside each noise part
/// * seed: seed of the core and both noise graphs
///
/// The core occupies ids `[0, core_size)` in both graphs; noise is
/// relabeled into `[core_size, core_size + extra_k)`. Core and noise
/// ranges are never connected, so the returned `truth` (the identity on
/// the core ids) satisfies the induced condition exactly, whatever the
/// noise looks like.
pub fn common_core_with_noise(
    core_size: usize,
    extra1: usize,
    extra2: usize,
    p_core: f64,
    p_noise: f64,
    seed: u64,
) -> Result<(Graph<usize>, Graph<usize>, Mapping<usize>), GenerateError> {
    check_probability("p_core", p_core)?;
    check_probability("p_noise", p_noise)?;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let core = erdos_renyi(core_size, p_core, &mut rng)?;
    let noise1 = erdos_renyi(extra1, p_noise, &mut rng)?;
    let noise2 = erdos_renyi(extra2, p_noise, &mut rng)?;
    let g1 = core.union(&noise1.relabel(|&u| u + core_size));
    let g2 = core.union(&noise2.relabel(|&u| u + core_size));
    let truth = Mapping::from_pairs((0..core_size).map(|u| (u, u)));
    Ok((g1, g2, truth))
}

//
// tests
//
