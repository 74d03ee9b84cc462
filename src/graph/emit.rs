//! Text output of vertex sequences.
//!
//! Orders render as space-separated vertex indices (`0 1 2 3`), the format the
//! driver prints and the scenario tests compare against.

use core::fmt;
use std::io;

use serde::{Deserialize, Serialize};

/// A sequence of vertices in the order a traversal or sort emitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitOrder(Vec<usize>);

impl VisitOrder {
    /// Wraps an emitted sequence.
    pub fn new(order: Vec<usize>) -> Self {
        Self(order)
    }

    /// The emitted vertices.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of emitted vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of `vertex` in the order, if emitted.
    pub fn position(&self, vertex: usize) -> Option<usize> {
        self.0.iter().position(|&v| v == vertex)
    }

    /// Unwraps the sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for VisitOrder {
    fn from(order: Vec<usize>) -> Self {
        Self(order)
    }
}

impl FromIterator<usize> for VisitOrder {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VisitOrder {
    type Item = &'a usize;
    type IntoIter = core::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VisitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
            for v in iter {
                write!(f, " {v}")?;
            }
        }
        Ok(())
    }
}

/// Writes `order` to `out` as space-separated indices followed by a newline.
///
/// # Errors
/// Propagates I/O errors from `out`.
pub fn write_order<W: io::Write>(out: &mut W, order: &[usize]) -> io::Result<()> {
    writeln!(out, "{}", VisitOrder::from(order.to_vec()))
}
