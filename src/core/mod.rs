//! Core types: coordinates, cells, actions, configuration, RNG.
//!
//! These are the leaf building blocks shared by the board, the rules engine
//! and the training loop.

pub mod coord;
pub mod cell;
pub mod action;
pub mod config;
pub mod rng;

pub use coord::{Coord, Offset, HEX_OFFSETS};
pub use cell::{cell_label, Cell, CellId};
pub use action::Action;
pub use config::{BoardConfig, Shape};
pub use rng::GameRng;
