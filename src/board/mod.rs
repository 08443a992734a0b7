//! Board topology and occupancy.
//!
//! A [`Board`] builds its cell grid for a [`Shape`](crate::core::Shape),
//! links every cell to its hex neighbours using explicit bounds predicates,
//! and tracks the set of holes. [`StateKey`] is the canonical serialization of
//! its occupancy.

pub mod grid;
pub mod state_key;

pub use grid::Board;
pub use state_key::StateKey;
