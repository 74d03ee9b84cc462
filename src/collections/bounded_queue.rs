//! `BoundedQueue` - a fixed-capacity FIFO of vertex indices.
//!
//! Storage is allocated once, up front. Two cursors track the queue:
//! - `front`: next slot to dequeue from
//! - `rear`: next slot to enqueue into
//!
//! Both cursors only ever advance, there is no wrap-around or compaction. The
//! capacity therefore limits the *total* number of enqueues over the lifetime
//! of one queue, which is exactly what a single BFS or Kahn pass needs: every
//! vertex is enqueued at most once per traversal.
//!
//! Performance Characteristics:
//! - `enqueue` / `dequeue`: O(1), bounds-checked
//! - Memory: `capacity` slots, allocated in `with_capacity`

use crate::error::{GraphError, Result};

/// A bounded, monotonic-cursor FIFO queue.
///
/// Invariant: `front <= rear <= capacity`; the queue is empty iff `front == rear`.
#[derive(Debug, Clone)]
pub struct BoundedQueue {
    items: Box<[usize]>,
    front: usize,
    rear: usize,
}

impl BoundedQueue {
    /// Creates an empty queue with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: vec![0; capacity].into_boxed_slice(),
            front: 0,
            rear: 0,
        }
    }

    /// Appends `value` at the tail.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] once `capacity` values have been
    /// enqueued; the queue is left untouched.
    #[inline]
    pub fn enqueue(&mut self, value: usize) -> Result<()> {
        let capacity = self.items.len();
        let slot = self
            .items
            .get_mut(self.rear)
            .ok_or(GraphError::CapacityExceeded { capacity })?;
        *slot = value;
        self.rear += 1;
        Ok(())
    }

    /// Removes and returns the value at the head.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyQueueUnderflow`] when the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(GraphError::EmptyQueueUnderflow);
        }
        let value = self.items[self.front];
        self.front += 1;
        Ok(value)
    }

    /// Removes the head value, or returns `None` when empty.
    ///
    /// Loop-friendly form of [`dequeue`](Self::dequeue).
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.dequeue().ok()
    }

    /// Returns the head value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.items[self.front])
    }

    /// Returns `true` iff the head cursor has caught up with the tail cursor.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Number of values currently queued.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rear - self.front
    }

    /// Total slot count fixed at construction.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Enqueues still possible before `CapacityExceeded`.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.items.len() - self.rear
    }

    /// Values enqueued since construction, including ones already dequeued.
    #[inline(always)]
    pub fn total_enqueued(&self) -> usize {
        self.rear
    }

    /// Iterates the queued values from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items[self.front..self.rear].iter().copied()
    }
}
