//! `proptest` strategies producing adjacency matrices.
//!
//! Enabled for the crate's own tests and, for downstream property tests, via
//! the `proptest` feature.

use proptest::collection::vec;
use proptest::prelude::*;

/// Any directed graph with up to `max_vertices` vertices, self-loops included.
pub fn digraph(max_vertices: usize) -> impl Strategy<Value = Vec<Vec<bool>>> {
    (0..=max_vertices).prop_flat_map(|n| vec(vec(any::<bool>(), n), n))
}

/// A DAG with 1 to `max_vertices` vertices.
///
/// Edges only go from a lower to a higher position of a random permutation,
/// so the vertex indices themselves carry no topological hint.
pub fn dag(max_vertices: usize) -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1..=max_vertices.max(1))
        .prop_flat_map(|n| {
            let ranks = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
            (ranks, vec(vec(any::<bool>(), n), n))
        })
        .prop_map(|(ranks, mut rows)| {
            for (u, row) in rows.iter_mut().enumerate() {
                for (v, cell) in row.iter_mut().enumerate() {
                    *cell &= ranks[u] < ranks[v];
                }
            }
            rows
        })
}

/// A graph together with a valid start vertex.
pub fn digraph_with_start(max_vertices: usize) -> impl Strategy<Value = (Vec<Vec<bool>>, usize)> {
    (1..=max_vertices.max(1)).prop_flat_map(|n| (vec(vec(any::<bool>(), n), n), 0..n))
}
