//! Episode records.
//!
//! A trajectory records one complete episode, capturing:
//! - The starting position
//! - Every `(prev_state, action, reward, new_state)` transition, exactly as it
//!   was forwarded to [`Agent::update`](crate::agents::Agent::update)
//! - The final result
//!
//! Trajectories are plain data: they can be handed to an external learner
//! through serde or as compact bincode bytes, and replayed on a fresh board.

use serde::{Deserialize, Serialize};

use crate::board::StateKey;
use crate::core::{Action, BoardConfig, Shape};
use crate::error::{Error, Result};
use crate::rules::{GameEngine, GameResult};

/// A single learning transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Position before the jump.
    pub prev_state: StateKey,

    /// The jump that was played.
    pub action: Action,

    /// Reward observed after the jump.
    pub reward: i64,

    /// Position after the jump.
    pub new_state: StateKey,
}

impl Transition {
    pub fn new(prev_state: StateKey, action: Action, reward: i64, new_state: StateKey) -> Self {
        Self {
            prev_state,
            action,
            reward,
            new_state,
        }
    }
}

/// A complete episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub shape: Shape,
    pub size: usize,

    /// Position the episode started from.
    pub initial_state: StateKey,

    /// All transitions in play order.
    pub transitions: Vec<Transition>,

    /// How the episode ended.
    pub result: GameResult,
}

impl Trajectory {
    /// Number of jumps played.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Actions in play order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.transitions.iter().map(|t| &t.action)
    }

    /// Sum of all rewards observed during the episode.
    pub fn total_reward(&self) -> i64 {
        self.transitions.iter().map(|t| t.reward).sum()
    }

    /// Terminal reward of the episode.
    pub fn final_reward(&self) -> i64 {
        self.result.reward(self.size)
    }

    /// Position the episode ended in.
    pub fn final_state(&self) -> &StateKey {
        self.transitions
            .last()
            .map_or(&self.initial_state, |t| &t.new_state)
    }

    /// Board configuration that reproduces the starting position.
    ///
    /// Fails if the recorded key does not describe a board of this shape
    /// and size.
    pub fn initial_config(&self) -> Result<BoardConfig> {
        let full = BoardConfig::new(self.shape, self.size).build()?;
        if self.initial_state.len() != full.num_cells() || !self.initial_state.is_well_formed() {
            return Err(corrupt(format!(
                "initial state '{}' is not a {} board of size {}",
                self.initial_state, self.shape, self.size
            )));
        }
        let occupancy = self.initial_state.occupancy();
        let holes = full
            .cells()
            .iter()
            .zip(occupancy)
            .filter(|(_, peg)| !peg)
            .map(|(cell, _)| {
                let coord = cell.coord();
                (coord.row as usize, coord.col as usize)
            });
        Ok(BoardConfig::new(self.shape, self.size).with_holes(holes))
    }

    /// Replay the episode on a fresh board.
    ///
    /// Every jump must be legal, every recorded state and reward must match
    /// what the engine produces, and the final position must be terminal
    /// with the recorded result. Returns the engine in its final position.
    pub fn replay(&self) -> Result<GameEngine> {
        let mut engine = GameEngine::new(&self.initial_config()?)?;

        for transition in &self.transitions {
            if engine.state_key() != transition.prev_state {
                return Err(Error::invalid_action(
                    transition.action,
                    "recorded position does not match replay",
                ));
            }
            engine.jump(&transition.action)?;
            if engine.state_key() != transition.new_state || engine.reward() != transition.reward {
                return Err(Error::invalid_action(
                    transition.action,
                    "recorded outcome does not match replay",
                ));
            }
        }

        if engine.state_key() != *self.final_state() {
            return Err(corrupt("final position does not match replay"));
        }
        if engine.is_terminal() != Some(self.result) {
            return Err(corrupt(format!(
                "recorded result {:?} does not match replay",
                self.result
            )));
        }

        Ok(engine)
    }

    /// Encode as bincode bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

fn corrupt(reason: impl Into<String>) -> Error {
    Error::CorruptTrajectory {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::IndexAgent;
    use crate::core::CellId;
    use crate::observer::NoopObserver;
    use crate::training::play_episode;

    fn key(s: &str) -> StateKey {
        StateKey::from_occupancy(s.chars().map(|c| c == '1'))
    }

    fn sample() -> Trajectory {
        Trajectory {
            shape: Shape::Triangle,
            size: 4,
            initial_state: key("1101111111"),
            transitions: vec![Transition::new(
                key("1101111111"),
                Action::new(CellId(9), CellId(5), CellId(2)),
                0,
                key("1111101110"),
            )],
            result: GameResult::Stuck { remaining_pegs: 8 },
        }
    }

    #[test]
    fn test_trajectory_accessors() {
        let t = sample();

        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!(t.total_reward(), 0);
        assert_eq!(t.final_reward(), -8);
        assert_eq!(t.final_state().as_str(), "1111101110");
        assert_eq!(t.actions().count(), 1);
    }

    #[test]
    fn test_initial_config() {
        let config = sample().initial_config().unwrap();
        assert_eq!(config, BoardConfig::triangle(4).with_hole(1, 1));
    }

    fn played(config: BoardConfig) -> Trajectory {
        let mut engine = GameEngine::new(&config).unwrap();
        play_episode(&mut engine, &mut IndexAgent::first(), &mut NoopObserver, 0.0, true).unwrap()
    }

    #[test]
    fn test_replay() {
        let t = played(BoardConfig::triangle(4).with_hole(1, 1));
        let engine = t.replay().unwrap();

        assert_eq!(&engine.state_key(), t.final_state());
        assert_eq!(engine.is_terminal(), Some(t.result));
    }

    #[test]
    fn test_replay_already_terminal_start() {
        let t = played(BoardConfig::diamond(3).with_hole(1, 1));
        assert!(t.is_empty());
        assert!(t.replay().is_ok());
    }

    #[test]
    fn test_replay_rejects_unfinished_episode() {
        // One jump in, three more are available.
        let err = sample().replay().unwrap_err();
        assert!(matches!(err, Error::CorruptTrajectory { .. }));
    }

    #[test]
    fn test_replay_rejects_relabelled_result() {
        let mut t = played(BoardConfig::triangle(5).with_hole(0, 0));
        t.result = if t.result.is_victory() {
            GameResult::Stuck { remaining_pegs: 1 }
        } else {
            GameResult::Victory
        };
        assert!(matches!(t.replay().unwrap_err(), Error::CorruptTrajectory { .. }));

        let mut t = played(BoardConfig::diamond(3).with_hole(1, 1));
        t.result = GameResult::Stuck { remaining_pegs: 7 };
        assert!(t.replay().is_err());
    }

    #[test]
    fn test_initial_config_rejects_short_key() {
        let t = Trajectory {
            shape: Shape::Triangle,
            size: 4,
            initial_state: key("0"),
            transitions: Vec::new(),
            result: GameResult::Victory,
        };

        assert!(matches!(t.initial_config().unwrap_err(), Error::CorruptTrajectory { .. }));
        assert!(t.replay().is_err());
    }

    #[test]
    fn test_initial_config_rejects_foreign_characters() {
        let mut t = sample();
        t.initial_state = serde_json::from_str("\"11x1111111\"").unwrap();

        assert_eq!(t.initial_state.len(), 10);
        assert!(matches!(t.initial_config().unwrap_err(), Error::CorruptTrajectory { .. }));
    }

    #[test]
    fn test_replay_detects_tampering() {
        let mut t = sample();
        t.transitions[0].new_state = key("1111111110");
        assert!(t.replay().is_err());

        let mut t = sample();
        t.transitions[0].reward = 4;
        assert!(t.replay().is_err());
    }

    #[test]
    fn test_bytes_round_trip() {
        let t = sample();
        let bytes = t.to_bytes().unwrap();
        assert_eq!(Trajectory::from_bytes(&bytes).unwrap(), t);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = Trajectory::from_bytes(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
