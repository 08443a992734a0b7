//! Non-learning reference agents.

use crate::board::StateKey;
use crate::core::{Action, GameRng};

use super::Agent;

/// Uniformly random move choice.
///
/// Ignores exploration settings and never learns. Reproducible from its seed.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Use an existing RNG stream, e.g. a fork of the trainer's.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn get_move(
        &mut self,
        _state: &StateKey,
        moves: &[Action],
        _exploration_rate: f64,
        _choose_best: bool,
    ) -> Action {
        moves[self.rng.gen_range_usize(0..moves.len())]
    }
}

/// Always picks the move at a fixed index, clamped to the last move.
///
/// Useful for replaying a known line of play.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexAgent {
    index: usize,
}

impl IndexAgent {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Always play the first generated move.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0)
    }
}

impl Agent for IndexAgent {
    fn get_move(
        &mut self,
        _state: &StateKey,
        moves: &[Action],
        _exploration_rate: f64,
        _choose_best: bool,
    ) -> Action {
        moves[self.index.min(moves.len() - 1)]
    }
}
