//! `GhostCell` - safe interior mutability via branded tokens.
//!
//! The cell is a thin wrapper over `UnsafeCell`; the brand lives in a
//! zero-sized marker, so in optimized builds token arguments vanish and access
//! compiles down to a plain load or store.

use core::cell::UnsafeCell;

use crate::token::Brand;
use crate::GhostToken;

/// A branded cell that can only be accessed using a token of the same brand.
#[repr(transparent)]
pub struct GhostCell<'brand, T: ?Sized> {
    _brand: Brand<'brand>,
    value: UnsafeCell<T>,
}

impl<'brand, T> GhostCell<'brand, T> {
    /// Creates a new `GhostCell`.
    pub const fn new(value: T) -> Self {
        Self {
            _brand: Brand::mint(),
            value: UnsafeCell::new(value),
        }
    }

    /// Consumes the cell, returning the wrapped value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Replaces the contained value, returning the old one.
    #[inline]
    pub fn replace(&self, token: &mut GhostToken<'brand>, value: T) -> T {
        core::mem::replace(self.borrow_mut(token), value)
    }
}

impl<'brand, T: ?Sized> GhostCell<'brand, T> {
    /// Borrows the cell immutably.
    #[inline(always)]
    pub fn borrow<'a>(&'a self, _token: &'a GhostToken<'brand>) -> &'a T {
        // SAFETY: a shared token borrow rules out any live `&mut GhostToken`,
        // hence no `&mut T` to this brand's cells can coexist.
        unsafe { &*self.value.get() }
    }

    /// Borrows the cell mutably.
    #[inline(always)]
    pub fn borrow_mut<'a>(&'a self, _token: &'a mut GhostToken<'brand>) -> &'a mut T {
        // SAFETY: the token is linear; holding `&mut` to it excludes every other
        // token-gated borrow of this brand for `'a`.
        unsafe { &mut *self.value.get() }
    }

    /// Mutable access through exclusive ownership of the cell; no token needed.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }
}

impl<'brand, T: Default> Default for GhostCell<'brand, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// SAFETY: `&T` is only handed out against `&GhostToken<'brand>` and `&mut T`
// only against `&mut GhostToken<'brand>`, so the token's borrow rules forbid a
// data race. Shared reads across threads additionally need `T: Sync`.
unsafe impl<'brand, T: ?Sized + Send> Send for GhostCell<'brand, T> {}
unsafe impl<'brand, T: ?Sized + Send + Sync> Sync for GhostCell<'brand, T> {}
