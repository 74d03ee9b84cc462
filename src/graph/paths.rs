//! Path queries built on the traversals: reachability, hop distances and
//! longest paths in a DAG.

use crate::collections::BoundedQueue;
use crate::error::Result;
use crate::graph::topo::topological_sort;
use crate::graph::traversal::Bfs;
use crate::graph::AdjacencyMatrix;
use crate::GhostToken;

/// Returns `true` if `to` is reachable from `from`. Every vertex reaches itself.
///
/// Stops the BFS as soon as `to` is dequeued.
///
/// # Errors
/// `VertexOutOfBounds` for an invalid endpoint; `CapacityExceeded` from the BFS queue.
pub fn has_path<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>, from: usize, to: usize) -> Result<bool> {
    graph.check_vertex(to)?;
    for vertex in Bfs::new(graph, token, from)? {
        if vertex? == to {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Hop distance from `start` to every vertex; `None` for unreachable vertices.
///
/// # Errors
/// `VertexOutOfBounds` for an invalid start; `CapacityExceeded` from the queue.
pub fn bfs_distances<'brand>(
    graph: &AdjacencyMatrix<'brand>,
    token: &GhostToken<'brand>,
    start: usize,
) -> Result<Vec<Option<usize>>> {
    graph.check_vertex(start)?;

    let mut dist = vec![None; graph.vertex_count()];
    let mut queue = BoundedQueue::with_capacity(graph.config().queue_capacity);
    dist[start] = Some(0);
    queue.enqueue(start)?;

    while let Some(u) = queue.pop() {
        let next = dist[u].map_or(0, |d| d + 1);
        for v in graph.out_neighbors(token, u) {
            if dist[v].is_none() {
                dist[v] = Some(next);
                queue.enqueue(v)?;
            }
        }
    }
    Ok(dist)
}

/// Fewest edges on a path `from -> to`, or `None` if unreachable.
///
/// # Errors
/// See [`bfs_distances`]; also `VertexOutOfBounds` for an invalid `to`.
pub fn shortest_path_len<'brand>(
    graph: &AdjacencyMatrix<'brand>,
    token: &GhostToken<'brand>,
    from: usize,
    to: usize,
) -> Result<Option<usize>> {
    graph.check_vertex(to)?;
    Ok(bfs_distances(graph, token, from)?[to])
}

/// Longest path (in edges) from `source` to every vertex of a DAG.
///
/// Dynamic programming over the Kahn order; `None` for vertices `source`
/// cannot reach.
///
/// # Errors
/// `VertexOutOfBounds` for an invalid source; `CyclicGraph` when the graph is
/// not a DAG; `CapacityExceeded` from the sort's queue.
pub fn longest_path_from<'brand>(
    graph: &AdjacencyMatrix<'brand>,
    token: &GhostToken<'brand>,
    source: usize,
) -> Result<Vec<Option<usize>>> {
    graph.check_vertex(source)?;
    let order = topological_sort(graph, token)?.into_complete()?;

    let mut dist: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    dist[source] = Some(0);
    for &u in order.as_slice() {
        let Some(du) = dist[u] else { continue };
        for v in graph.out_neighbors(token, u) {
            dist[v] = Some(dist[v].map_or(du + 1, |dv| dv.max(du + 1)));
        }
    }
    Ok(dist)
}
