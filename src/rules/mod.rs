//! Rules engine for peg solitaire.
//!
//! [`GameEngine`] wraps one board for one episode and defines:
//! - Legal jumps for the current position
//! - How a jump modifies the board
//! - Victory, terminal and reward conditions
//!
//! Agents and training code call into the engine but never touch the board
//! mutably themselves.

pub mod engine;

pub use engine::{GameEngine, GameResult};
