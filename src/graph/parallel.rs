//! Independent traversals fanned out over the rayon pool.
//!
//! Each BFS owns its queue and visited set, and the graph is only read, so a
//! shared `&GhostToken` is all the tasks need.

use rayon::prelude::*;

use crate::error::Result;
use crate::graph::emit::VisitOrder;
use crate::graph::traversal::bfs;
use crate::graph::AdjacencyMatrix;
use crate::GhostToken;

/// Runs a BFS from every vertex in parallel.
///
/// Entry `v` of the result is the BFS order starting at `v`.
///
/// # Errors
/// The first queue error any source hits.
pub fn reachability_sweep<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>) -> Result<Vec<VisitOrder>> {
    (0..graph.vertex_count())
        .into_par_iter()
        .map(|start| bfs(graph, token, start))
        .collect()
}
