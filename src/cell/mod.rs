//! Token-branded interior mutability.
//!
//! Only the single safe primitive the graph layer needs lives here:
//! [`GhostCell`], whose contents are reachable exclusively through a
//! [`GhostToken`](crate::GhostToken) of the same brand.

mod ghost_cell;

pub use ghost_cell::GhostCell;
