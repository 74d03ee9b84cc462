//! Adjacency-matrix graphs and the algorithms that walk them.
//!
//! - `matrix`: the branded [`AdjacencyMatrix`]
//! - `traversal`: [`bfs`] / [`dfs`] and their lazy iterator forms
//! - `topo`: Kahn's [`topological_sort`]
//! - `paths`: reachability and path-length queries
//! - `document`: JSON graph descriptions
//! - `emit`: text rendering of orders

pub mod access;
pub mod document;
pub mod emit;
pub mod matrix;
pub mod paths;
pub mod topo;
pub mod traversal;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(any(test, feature = "proptest"))]
pub mod strategies;

pub use access::visited::VisitedSet;
pub use document::GraphDocument;
pub use emit::{write_order, VisitOrder};
pub use matrix::{AdjacencyMatrix, EdgeCell};
pub use paths::{bfs_distances, has_path, longest_path_from, shortest_path_len};
pub use topo::{is_acyclic, topological_sort, InDegreeTable, TopologicalOrder};
pub use traversal::{bfs, dfs, dfs_with_visited, Bfs, Dfs};

#[cfg(feature = "parallel")]
pub use parallel::reachability_sweep;

#[cfg(test)]
mod tests;
