//! `GhostToken` - the capability that gates access to branded graph storage.
//!
//! A token is a zero-sized value tied to a fresh, invariant `'brand` lifetime.
//! Graph storage created inside a token scope carries the same brand, so:
//! - reading edges requires `&GhostToken<'brand>`
//! - editing edges requires `&mut GhostToken<'brand>`
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is **not** `Copy`/`Clone`. Any safe API that hands out
//! `&mut T` from a shared cell demands `&mut GhostToken<'brand>`, and Rust
//! forbids two live mutable borrows of the same token.

mod invariant;

pub use invariant::Brand;

/// A zero-sized token that controls access to `GhostCell`s of the same brand.
#[derive(Debug)]
pub struct GhostToken<'brand>(Brand<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and runs `f` with it.
    ///
    /// The closure is generic over the brand, so the token (and everything
    /// branded with it) cannot escape the scope.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ghostwalk::{AdjacencyMatrix, GhostToken, TraversalConfig};
    ///
    /// let order = GhostToken::new(|mut token| {
    ///     let graph = AdjacencyMatrix::new(3, &TraversalConfig::default()).unwrap();
    ///     graph.add_edge(&mut token, 0, 2).unwrap();
    ///     ghostwalk::graph::bfs(&graph, &token, 0).unwrap()
    /// });
    /// assert_eq!(order.as_slice(), &[0, 2]);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(Brand::mint()))
    }
}
