//! Capacity limits for graphs and the queues that walk them.
//!
//! The limits are plain data so that drivers can load them from JSON next to
//! the graph itself; every graph constructor validates against them.

use serde::{Deserialize, Serialize};

use crate::error::{MalformedInput, Result};

/// Default upper bound on vertex count.
pub const DEFAULT_MAX_VERTICES: usize = 100;

/// Default number of slots in a traversal queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// Limits applied when a graph is built and when it is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraversalConfig {
    /// Largest vertex count a graph may declare.
    pub max_vertices: usize,
    /// Slots available to each `BoundedQueue` a traversal creates.
    ///
    /// Cursors never rewind, so this bounds the total number of enqueues of a
    /// single traversal, not the number of queued vertices at one time.
    pub queue_capacity: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl TraversalConfig {
    /// Sets the maximum vertex count.
    #[must_use]
    pub const fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Sets the queue capacity.
    #[must_use]
    pub const fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    /// Checks that both limits are usable.
    ///
    /// # Errors
    /// Returns [`MalformedInput::InvalidConfig`] when a limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            return Err(MalformedInput::InvalidConfig("max_vertices must be positive").into());
        }
        if self.queue_capacity == 0 {
            return Err(MalformedInput::InvalidConfig("queue_capacity must be positive").into());
        }
        Ok(())
    }

    /// Checks a requested vertex count against `max_vertices` and returns the
    /// number of matrix cells it needs.
    pub(crate) fn check_vertices(&self, vertices: usize) -> Result<usize> {
        self.validate()?;
        if vertices > self.max_vertices {
            return Err(MalformedInput::TooManyVertices {
                vertices,
                max: self.max_vertices,
            }
            .into());
        }
        // One byte per cell; allocations past `isize::MAX` bytes are never valid.
        vertices
            .checked_mul(vertices)
            .filter(|&cells| isize::try_from(cells).is_ok())
            .ok_or_else(|| MalformedInput::MatrixTooLarge { vertices }.into())
    }
}
