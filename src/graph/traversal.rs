//! Breadth-first and depth-first traversal over an [`AdjacencyMatrix`].
//!
//! Both traversals scan neighbors in increasing index order, so the emitted
//! order is fully determined by the matrix and the start vertex.
//!
//! - [`Bfs`] marks a vertex visited when it is *enqueued*, so a vertex reached
//!   through several edges is still queued once. Its queue is a
//!   [`BoundedQueue`] sized by the graph's `queue_capacity`.
//! - [`Dfs`] is a pre-order walk driven by an explicit stack of
//!   `(vertex, next_neighbor)` frames, yielding exactly the order the
//!   recursive formulation would, without using the call stack.

use core::borrow::{Borrow, BorrowMut};

use crate::collections::BoundedQueue;
use crate::error::{MalformedInput, Result};
use crate::graph::access::visited::VisitedSet;
use crate::graph::emit::VisitOrder;
use crate::graph::AdjacencyMatrix;
use crate::GhostToken;

/// A lazy breadth-first traversal.
///
/// Yields `Ok(vertex)` in BFS order. If the queue runs out of capacity the
/// iterator yields one `Err(CapacityExceeded)` and then ends.
pub struct Bfs<'a, 'brand> {
    graph: &'a AdjacencyMatrix<'brand>,
    token: &'a GhostToken<'brand>,
    visited: VisitedSet,
    queue: BoundedQueue,
    done: bool,
}

impl<'a, 'brand> Bfs<'a, 'brand> {
    /// Starts a BFS at `start`.
    ///
    /// # Errors
    /// Returns `VertexOutOfBounds` for an invalid start, or `CapacityExceeded`
    /// when the configured queue capacity cannot hold even the start vertex.
    pub fn new(graph: &'a AdjacencyMatrix<'brand>, token: &'a GhostToken<'brand>, start: usize) -> Result<Self> {
        graph.check_vertex(start)?;

        let mut visited = VisitedSet::new(graph.vertex_count());
        let mut queue = BoundedQueue::with_capacity(graph.config().queue_capacity);
        visited.try_visit(start);
        queue.enqueue(start)?;

        Ok(Self {
            graph,
            token,
            visited,
            queue,
            done: false,
        })
    }

    /// The visited set so far (vertices emitted or still queued).
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }
}

impl Iterator for Bfs<'_, '_> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(node) = self.queue.pop() else {
            self.done = true;
            return None;
        };

        for i in self.graph.out_neighbors(self.token, node) {
            if self.visited.try_visit(i) {
                if let Err(err) = self.queue.enqueue(i) {
                    debug_event!(node, neighbor = i, "bfs queue exhausted");
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }

        trace_event!(node, queued = self.queue.len(), "bfs emit");
        Some(Ok(node))
    }
}

/// Runs a complete BFS from `start` and returns the visitation order.
///
/// # Errors
/// See [`Bfs::new`]; additionally `CapacityExceeded` if the traversal needs
/// more enqueues than the configured queue capacity.
pub fn bfs<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>, start: usize) -> Result<VisitOrder> {
    Bfs::new(graph, token, start)?.collect::<Result<Vec<_>>>().map(VisitOrder::new)
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    next: usize,
}

/// A lazy pre-order depth-first traversal.
///
/// `V` is the visited storage: an owned [`VisitedSet`] by default, or
/// `&mut VisitedSet` to share one set across several walks.
pub struct Dfs<'a, 'brand, V = VisitedSet> {
    graph: &'a AdjacencyMatrix<'brand>,
    token: &'a GhostToken<'brand>,
    visited: V,
    stack: Vec<Frame>,
    start: Option<usize>,
}

impl<'a, 'brand> Dfs<'a, 'brand> {
    /// Starts a DFS at `start` with a fresh visited set.
    ///
    /// # Errors
    /// Returns `VertexOutOfBounds` for an invalid start.
    pub fn new(graph: &'a AdjacencyMatrix<'brand>, token: &'a GhostToken<'brand>, start: usize) -> Result<Self> {
        Self::with_visited(graph, token, start, VisitedSet::new(graph.vertex_count()))
    }
}

impl<'a, 'brand, V: BorrowMut<VisitedSet>> Dfs<'a, 'brand, V> {
    /// Starts a DFS at `start` using caller-provided visited storage.
    ///
    /// The start vertex is always emitted, even if already marked; its
    /// neighbors are explored only if unvisited.
    ///
    /// # Errors
    /// Returns `VertexOutOfBounds` for an invalid start, or `VisitedSetSize`
    /// when the set does not match the graph's vertex count.
    pub fn with_visited(
        graph: &'a AdjacencyMatrix<'brand>,
        token: &'a GhostToken<'brand>,
        start: usize,
        mut visited: V,
    ) -> Result<Self> {
        graph.check_vertex(start)?;
        let found = visited.borrow().len();
        if found != graph.vertex_count() {
            return Err(MalformedInput::VisitedSetSize {
                expected: graph.vertex_count(),
                found,
            }
            .into());
        }

        visited.borrow_mut().try_visit(start);
        Ok(Self {
            graph,
            token,
            visited,
            stack: vec![Frame { vertex: start, next: 0 }],
            start: Some(start),
        })
    }

    /// Current depth of the explicit work stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Consumes the traversal, returning its visited storage.
    pub fn into_visited(self) -> V {
        self.visited
    }
}

impl<V: BorrowMut<VisitedSet>> Iterator for Dfs<'_, '_, V> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if let Some(start) = self.start.take() {
            trace_event!(node = start, "dfs emit");
            return Some(start);
        }

        loop {
            let frame = self.stack.last_mut()?;
            let row = self.graph.row(self.token, frame.vertex);
            let visited = self.visited.borrow_mut();

            match (frame.next..row.len()).find(|&i| row[i] && !visited.is_visited(i)) {
                Some(i) => {
                    frame.next = i + 1;
                    visited.try_visit(i);
                    self.stack.push(Frame { vertex: i, next: 0 });
                    trace_event!(node = i, depth = self.stack.len(), "dfs emit");
                    return Some(i);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Runs a complete pre-order DFS from `start` and returns the visitation order.
///
/// # Errors
/// Returns `VertexOutOfBounds` for an invalid start.
pub fn dfs<'brand>(graph: &AdjacencyMatrix<'brand>, token: &GhostToken<'brand>, start: usize) -> Result<VisitOrder> {
    Ok(Dfs::new(graph, token, start)?.collect())
}

/// Runs a DFS from `start` that reads and updates a caller-owned visited set.
///
/// Vertices already marked in `visited` are skipped, so repeated calls over
/// the same set visit every vertex at most once across all calls.
///
/// # Errors
/// See [`Dfs::with_visited`].
pub fn dfs_with_visited<'brand>(
    graph: &AdjacencyMatrix<'brand>,
    token: &GhostToken<'brand>,
    start: usize,
    visited: &mut VisitedSet,
) -> Result<VisitOrder> {
    Ok(Dfs::with_visited(graph, token, start, visited)?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GraphError, TraversalConfig};

    fn diamond<'brand>(config: &TraversalConfig) -> AdjacencyMatrix<'brand> {
        AdjacencyMatrix::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)], config).unwrap()
    }

    #[test]
    fn bfs_diamond() {
        GhostToken::new(|token| {
            let graph = diamond(&TraversalConfig::default());
            assert_eq!(bfs(&graph, &token, 0).unwrap().as_slice(), &[0, 1, 2, 3]);
            assert_eq!(bfs(&graph, &token, 2).unwrap().as_slice(), &[2, 3]);
        });
    }

    #[test]
    fn dfs_diamond() {
        GhostToken::new(|token| {
            let graph = diamond(&TraversalConfig::default());
            assert_eq!(dfs(&graph, &token, 0).unwrap().as_slice(), &[0, 1, 3, 2]);
        });
    }

    #[test]
    fn bfs_marks_on_enqueue() {
        // 0 -> 1,2 ; 1 -> 2 ; 2 -> 1. Both 1 and 2 are discovered from 0 first.
        GhostToken::new(|token| {
            let config = TraversalConfig::default().with_queue_capacity(3);
            let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (0, 2), (1, 2), (2, 1)], &config).unwrap();
            let mut walk = Bfs::new(&graph, &token, 0).unwrap();
            assert_eq!(walk.next(), Some(Ok(0)));
            assert_eq!(walk.visited().count(), 3);
            assert_eq!(walk.collect::<Result<Vec<_>>>().unwrap(), vec![1, 2]);
        });
    }

    #[test]
    fn bfs_reports_queue_exhaustion() {
        GhostToken::new(|token| {
            let config = TraversalConfig::default().with_queue_capacity(2);
            let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (0, 2)], &config).unwrap();

            let mut walk = Bfs::new(&graph, &token, 0).unwrap();
            assert_eq!(walk.next(), Some(Err(GraphError::CapacityExceeded { capacity: 2 })));
            assert_eq!(walk.next(), None);

            assert_eq!(bfs(&graph, &token, 0), Err(GraphError::CapacityExceeded { capacity: 2 }));
        });
    }

    #[test]
    fn dfs_explicit_stack_handles_long_chains() {
        let n = 3_000;
        let config = TraversalConfig::default().with_max_vertices(n);
        GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_edges(n, (0..n - 1).map(|v| (v, v + 1)), &config).unwrap();
            let order = dfs(&graph, &token, 0).unwrap();
            assert_eq!(order.len(), n);
            assert!(order.as_slice().windows(2).all(|w| w[1] == w[0] + 1));
        });
    }

    #[test]
    fn dfs_backtracks_to_next_sibling() {
        // 0 -> 1,4 ; 1 -> 2,3 ; 3 -> 0 (back edge) ; 4 -> 2
        GhostToken::new(|token| {
            let graph =
                AdjacencyMatrix::from_edges(5, [(0, 1), (0, 4), (1, 2), (1, 3), (3, 0), (4, 2)], &TraversalConfig::default())
                    .unwrap();
            let mut walk = Dfs::new(&graph, &token, 0).unwrap();
            assert_eq!(walk.next(), Some(0));
            assert_eq!(walk.next(), Some(1));
            assert_eq!(walk.next(), Some(2));
            assert_eq!(walk.depth(), 3);
            assert_eq!(walk.collect::<Vec<_>>(), vec![3, 4]);
        });
    }

    #[test]
    fn shared_visited_set_spans_calls() {
        GhostToken::new(|token| {
            // Two components: {0 -> 1}, {2 -> 1}.
            let graph = AdjacencyMatrix::from_edges(3, [(0, 1), (2, 1)], &TraversalConfig::default()).unwrap();
            let mut visited = VisitedSet::new(3);

            assert_eq!(dfs_with_visited(&graph, &token, 0, &mut visited).unwrap().as_slice(), &[0, 1]);
            assert_eq!(dfs_with_visited(&graph, &token, 2, &mut visited).unwrap().as_slice(), &[2]);
            assert_eq!(visited.count(), 3);
        });
    }

    #[test]
    fn bad_arguments_are_rejected() {
        GhostToken::new(|token| {
            let graph = diamond(&TraversalConfig::default());
            assert_eq!(bfs(&graph, &token, 4).err(), Some(GraphError::out_of_bounds(4, 4)));
            assert_eq!(dfs(&graph, &token, 9).err(), Some(GraphError::out_of_bounds(9, 4)));

            let mut small = VisitedSet::new(2);
            assert_eq!(
                dfs_with_visited(&graph, &token, 0, &mut small).err(),
                Some(GraphError::MalformedInput(MalformedInput::VisitedSetSize { expected: 4, found: 2 }))
            );
        });
    }

    #[test]
    fn self_loops_are_harmless() {
        GhostToken::new(|token| {
            let graph = AdjacencyMatrix::from_edges(2, [(0, 0), (0, 1), (1, 1)], &TraversalConfig::default()).unwrap();
            assert_eq!(bfs(&graph, &token, 0).unwrap().as_slice(), &[0, 1]);
            assert_eq!(dfs(&graph, &token, 0).unwrap().as_slice(), &[0, 1]);
        });
    }
}
