//! Error taxonomy shared by the queue, the traversals and graph construction.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

/// Everything that can go wrong while building or walking a graph.
///
/// None of these are retried internally; they are always surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An enqueue was attempted after the queue's tail cursor reached capacity.
    #[error("bounded queue capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// The fixed capacity of the queue.
        capacity: usize,
    },

    /// A dequeue was attempted on an empty queue.
    #[error("dequeue from an empty bounded queue")]
    EmptyQueueUnderflow,

    /// The input graph or a vertex argument is not usable.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    /// An operation that needs a complete topological order met a cycle.
    #[error("graph has a cycle: only {emitted} of {vertices} vertices could be ordered")]
    CyclicGraph {
        /// Vertices Kahn's algorithm managed to emit.
        emitted: usize,
        /// Total vertices in the graph.
        vertices: usize,
    },
}

/// Reasons an input is rejected before any traversal begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    /// The vertex count exceeds the configured maximum.
    #[error("{vertices} vertices exceeds the configured maximum of {max}")]
    TooManyVertices {
        /// Requested vertex count.
        vertices: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A matrix row does not have one cell per vertex.
    #[error("row {row} has {found} cells, expected {expected}")]
    DimensionMismatch {
        /// Offending row index.
        row: usize,
        /// Expected row length (the vertex count).
        expected: usize,
        /// Actual row length.
        found: usize,
    },

    /// A vertex index is outside `0..vertices`.
    #[error("vertex {vertex} out of bounds for a graph of {vertices} vertices")]
    VertexOutOfBounds {
        /// The offending index.
        vertex: usize,
        /// Vertex count of the graph.
        vertices: usize,
    },

    /// A `vertices x vertices` matrix cannot be addressed on this platform.
    #[error("a {vertices}x{vertices} adjacency matrix is too large to allocate")]
    MatrixTooLarge {
        /// Requested vertex count.
        vertices: usize,
    },

    /// A caller-supplied visited set does not cover the graph's vertices.
    #[error("visited set covers {found} vertices, graph has {expected}")]
    VisitedSetSize {
        /// Vertex count of the graph.
        expected: usize,
        /// Size of the supplied set.
        found: usize,
    },

    /// A configuration value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A graph document could not be parsed or is inconsistent.
    #[error("invalid graph document: {0}")]
    Document(String),
}

impl GraphError {
    /// Shorthand for a [`MalformedInput::VertexOutOfBounds`] error.
    pub(crate) fn out_of_bounds(vertex: usize, vertices: usize) -> Self {
        MalformedInput::VertexOutOfBounds { vertex, vertices }.into()
    }

    /// Returns `true` for errors raised by the bounded queue itself.
    pub fn is_queue_error(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. } | Self::EmptyQueueUnderflow)
    }
}
