//! Visited sets for graph traversals.
//!
//! A `VisitedSet` is a dense, word-packed bitmap sized to the graph's vertex
//! count. Each traversal creates its own (or borrows one from the caller for
//! DFS), so no visited state ever leaks between calls.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set for a fixed vertex count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// Creates a set for `len` vertices, all unvisited.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Number of vertices the set covers.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set covers no vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Marks every vertex unvisited.
    #[inline]
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Marks `node` visited. Returns `true` iff it was not visited before.
    ///
    /// # Panics
    /// Panics if `node >= self.len()`.
    #[inline(always)]
    pub fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.len, "vertex {node} out of bounds for visited set of {}", self.len);
        let (word, mask) = Self::locate(node);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// Returns `true` if `node` has been visited. Out-of-range nodes are unvisited.
    #[inline(always)]
    pub fn is_visited(&self, node: usize) -> bool {
        if node >= self.len {
            return false;
        }
        let (word, mask) = Self::locate(node);
        self.words[word] & mask != 0
    }

    /// Number of visited vertices.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterates the vertices not yet visited, ascending.
    pub fn unvisited(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&v| !self.is_visited(v))
    }

    #[inline(always)]
    fn locate(node: usize) -> (usize, u64) {
        (node / WORD_BITS, 1u64 << (node % WORD_BITS))
    }
}
