//! # `ghostwalk` - Branded Graph Traversal Toolkit
//!
//! Breadth-first search, depth-first search and Kahn topological ordering over
//! dense adjacency-matrix graphs, with every piece of per-call state bounded
//! and checked.
//!
//! ## Guarantees
//!
//! ### Bounded, checked storage
//! - **Bounded queue**: BFS and Kahn's algorithm share a fixed-capacity FIFO
//!   whose overflow and underflow are reported as errors, never as silent
//!   writes past the end.
//! - **Configured limits**: vertex count and queue capacity come from a
//!   [`TraversalConfig`] validated before any traversal begins.
//! - **No call-stack recursion**: DFS runs on an explicit frame stack, so deep
//!   graphs cannot exhaust the thread stack.
//!
//! ### Determinism
//! - Neighbors are always scanned in ascending index order, so BFS, DFS and
//!   topological orders depend only on the matrix and the start vertex.
//! - A cyclic graph yields a partial topological order whose incompleteness is
//!   observable through [`TopologicalOrder::is_complete`].
//!
//! ### Branded access
//! The adjacency matrix lives in a [`GhostCell`]: reads take a shared
//! [`GhostToken`], edge edits take it mutably. Graphs from different token
//! scopes cannot be mixed up at compile time.
//!
//! ## Example
//!
//! ```rust
//! use ghostwalk::{graph, AdjacencyMatrix, GhostToken, TraversalConfig};
//!
//! GhostToken::new(|token| {
//!     // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
//!     let g = AdjacencyMatrix::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)], &TraversalConfig::default())
//!         .unwrap();
//!
//!     assert_eq!(graph::bfs(&g, &token, 0).unwrap().to_string(), "0 1 2 3");
//!     assert_eq!(graph::dfs(&g, &token, 0).unwrap().to_string(), "0 1 3 2");
//!
//!     let topo = graph::topological_sort(&g, &token).unwrap();
//!     assert!(topo.is_complete());
//!     assert_eq!(topo.order().to_string(), "0 1 2 3");
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

pub mod cell;
pub mod collections;
pub mod config;
pub mod error;
pub mod graph;
pub mod token;

pub use cell::GhostCell;
pub use collections::BoundedQueue;
pub use config::TraversalConfig;
pub use error::{GraphError, MalformedInput, Result};
pub use graph::{AdjacencyMatrix, TopologicalOrder, VisitOrder, VisitedSet};
pub use token::GhostToken;

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Tokens are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // The brand adds nothing to a cell.
    assert!(mem::size_of::<GhostCell<'static, u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<GhostCell<'static, u64>>() == mem::align_of::<u64>());
};
