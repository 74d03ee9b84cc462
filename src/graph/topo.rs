//! Topological ordering with Kahn's algorithm.
//!
//! The sort never fails on a cycle. Vertices on (or behind) a cycle never
//! reach in-degree zero and are simply not emitted, so the result is the
//! acyclic prefix of the graph. [`TopologicalOrder`] carries the vertex count
//! alongside the emitted order so callers can tell a complete order from a
//! partial one.
//!
//! Ties between simultaneously-ready vertices resolve by ascending index:
//! sources are enqueued in index order and successors are released in
//! row-scan order.

use crate::collections::BoundedQueue;
use crate::error::{GraphError, Result};
use crate::graph::emit::VisitOrder;
use crate::graph::AdjacencyMatrix;
use crate::GhostToken;

/// Incoming-edge counts for every vertex of one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InDegreeTable {
    degrees: Vec<usize>,
}

impl InDegreeTable {
    /// Counts incoming edges by scanning every ordered pair `(u, v)`.
    pub fn compute<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>) -> Self {
        let mut degrees = vec![0usize; graph.vertex_count()];
        for (_, v) in graph.edges(token) {
            degrees[v] += 1;
        }
        Self { degrees }
    }

    /// In-degree of `vertex`, or `None` if out of range.
    #[inline]
    pub fn get(&self, vertex: usize) -> Option<usize> {
        self.degrees.get(vertex).copied()
    }

    /// Consumes one incoming edge of `vertex`.
    ///
    /// Returns `Some(true)` when the count hits zero, `Some(false)` while edges
    /// remain, and `None` if `vertex` is out of range or has no edge left.
    #[inline]
    pub fn release(&mut self, vertex: usize) -> Option<bool> {
        let d = self.degrees.get_mut(vertex)?;
        *d = d.checked_sub(1)?;
        Some(*d == 0)
    }

    /// Vertices whose in-degree is currently zero, ascending.
    pub fn sources(&self) -> impl Iterator<Item = usize> + '_ {
        self.degrees
            .iter()
            .enumerate()
            .filter_map(|(v, &d)| (d == 0).then_some(v))
    }

    /// Raw counts, indexed by vertex.
    pub fn as_slice(&self) -> &[usize] {
        &self.degrees
    }
}

/// The result of a Kahn pass: the emitted order and the graph's vertex count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: VisitOrder,
    vertices: usize,
}

impl TopologicalOrder {
    /// The emitted vertices, in order.
    #[inline]
    pub fn order(&self) -> &VisitOrder {
        &self.order
    }

    /// The emitted vertices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Number of vertices emitted.
    #[inline]
    pub fn emitted(&self) -> usize {
        self.order.len()
    }

    /// Number of vertices in the sorted graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// `true` iff every vertex was emitted, i.e. the graph is a DAG.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.vertices
    }

    /// Vertices that were never emitted, ascending.
    ///
    /// Empty for a DAG; otherwise the cycles and everything downstream of them.
    pub fn unsorted(&self) -> Vec<usize> {
        let mut emitted = vec![false; self.vertices];
        for &v in self.order.as_slice() {
            emitted[v] = true;
        }
        (0..self.vertices).filter(|&v| !emitted[v]).collect()
    }

    /// Returns the order if complete.
    ///
    /// # Errors
    /// Returns [`GraphError::CyclicGraph`] when vertices are missing.
    pub fn into_complete(self) -> Result<VisitOrder> {
        if self.is_complete() {
            Ok(self.order)
        } else {
            Err(GraphError::CyclicGraph {
                emitted: self.order.len(),
                vertices: self.vertices,
            })
        }
    }
}

/// Orders the graph's vertices with Kahn's algorithm.
///
/// # Errors
/// Only queue errors: `CapacityExceeded` when the configured queue capacity is
/// smaller than the number of vertices that become ready. Cycles are *not*
/// errors; check [`TopologicalOrder::is_complete`].
pub fn topological_sort<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>) -> Result<TopologicalOrder> {
    let n = graph.vertex_count();
    let mut in_degree = InDegreeTable::compute(graph, token);
    let mut queue = BoundedQueue::with_capacity(graph.config().queue_capacity);

    for v in in_degree.sources() {
        queue.enqueue(v)?;
    }

    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop() {
        order.push(u);
        for v in graph.out_neighbors(token, u) {
            if in_degree.release(v) == Some(true) {
                queue.enqueue(v)?;
            }
        }
    }

    if order.len() < n {
        debug_event!(emitted = order.len(), vertices = n, "topological sort incomplete; graph has a cycle");
    } else {
        trace_event!(vertices = n, "topological sort complete");
    }

    Ok(TopologicalOrder {
        order: VisitOrder::new(order),
        vertices: n,
    })
}

/// Returns `true` iff Kahn's algorithm orders every vertex.
///
/// # Errors
/// Propagates queue errors from [`topological_sort`].
pub fn is_acyclic<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>) -> Result<bool> {
    topological_sort(graph, token).map(|topo| topo.is_complete())
}
