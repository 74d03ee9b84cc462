//! Low-level building blocks shared by the graph algorithms.

pub mod visited;
