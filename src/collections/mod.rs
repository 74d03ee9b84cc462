//! Containers used by the graph algorithms.

pub mod bounded_queue;

pub use bounded_queue::BoundedQueue;
