//! Agent calling contract.
//!
//! The engine is agent-agnostic: anything that can pick one of the offered
//! jumps and optionally learn from the resulting transition can play. Tabular
//! learners, random choosers and human-mediated input all fit behind
//! [`Agent`].
//!
//! ## Event Sequence
//!
//! For every step of an episode, [`play_episode`](crate::training::play_episode)
//! calls:
//! 1. `get_move(state, moves, exploration_rate, choose_best)` with a
//!    non-empty `moves` slice
//! 2. `update(prev_state, action, reward, new_state)` after the jump
//!
//! ```
//! use peg_solitaire::agents::Agent;
//! use peg_solitaire::board::StateKey;
//! use peg_solitaire::core::Action;
//!
//! struct LastMove;
//!
//! impl Agent for LastMove {
//!     fn get_move(&mut self, _state: &StateKey, moves: &[Action], _e: f64, _best: bool) -> Action {
//!         moves[moves.len() - 1]
//!     }
//! }
//! ```

pub mod baseline;

pub use baseline::{IndexAgent, RandomAgent};

use crate::board::StateKey;
use crate::core::Action;

/// A move chooser, and optionally a learner.
pub trait Agent {
    /// Pick one of `moves` for the position `state`.
    ///
    /// `moves` is never empty. The returned action must be an element of
    /// `moves`; anything else fails the episode with
    /// [`Error::InvalidAction`](crate::Error::InvalidAction).
    ///
    /// `exploration_rate` is the probability with which an exploring agent
    /// should ignore its estimates; `choose_best` asks for pure exploitation.
    fn get_move(
        &mut self,
        state: &StateKey,
        moves: &[Action],
        exploration_rate: f64,
        choose_best: bool,
    ) -> Action;

    /// Learn from one transition.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn update(&mut self, _prev_state: &StateKey, _action: &Action, _reward: i64, _new_state: &StateKey) {}
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn get_move(
        &mut self,
        state: &StateKey,
        moves: &[Action],
        exploration_rate: f64,
        choose_best: bool,
    ) -> Action {
        (**self).get_move(state, moves, exploration_rate, choose_best)
    }

    fn update(&mut self, prev_state: &StateKey, action: &Action, reward: i64, new_state: &StateKey) {
        (**self).update(prev_state, action, reward, new_state);
    }
}
