use core::marker::PhantomData;

/// Zero-sized brand tying a token and its graphs to one `'brand` lifetime.
///
/// The lifetime is invariant, so the compiler can neither shrink nor grow it
/// to make two scopes agree:
///
/// ```compile_fail
/// use ghostwalk::{AdjacencyMatrix, GhostToken, TraversalConfig};
///
/// GhostToken::new(|outer| {
///     let g = AdjacencyMatrix::new(2, &TraversalConfig::default()).unwrap();
///     let _ = g.has_edge(&outer, 0, 1);
///     GhostToken::new(|inner| {
///         // `g` is branded by `outer`; `inner` cannot read it.
///         let _ = g.has_edge(&inner, 0, 1);
///     });
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Brand<'brand>(PhantomData<fn(&'brand ()) -> &'brand ()>);

impl Brand<'_> {
    /// Mints the marker; only token scopes and branded cells call this.
    #[inline(always)]
    pub(crate) const fn mint() -> Self {
        Self(PhantomData)
    }
}
