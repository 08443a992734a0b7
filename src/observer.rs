//! Read-only observation of episodes.
//!
//! Renderers, terminal front-ends and loggers implement [`BoardObserver`].
//! They receive shared references only, so they cannot change the game.
//!
//! # Event Sequence
//!
//! For each jump in an episode:
//! 1. `on_step(board, Some(action))` - before the jump is applied
//! 2. `on_step(board, None)` - after the jump is applied
//!
//! Then once, when no jump remains or the game is won:
//! 3. `on_episode_end(board, result)`

use serde::{Deserialize, Serialize};

use crate::board::{Board, StateKey};
use crate::core::Action;
use crate::rules::GameResult;

/// Observer of board snapshots.
pub trait BoardObserver {
    /// Called around every jump.
    fn on_step(&mut self, _board: &Board, _action: Option<&Action>) {}

    /// Called when an episode reaches a terminal position.
    fn on_episode_end(&mut self, _board: &Board, _result: &GameResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BoardObserver for NoopObserver {}

/// One recorded observation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Snapshot around a jump; `action` is `None` after the jump landed.
    Step {
        state: StateKey,
        action: Option<Action>,
    },
    /// Final position of an episode.
    EpisodeEnd { state: StateKey, result: GameResult },
}

/// In-memory event log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<BoardEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Actions in the order they were announced.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.events.iter().filter_map(|event| match event {
            BoardEvent::Step {
                action: Some(action),
                ..
            } => Some(action),
            _ => None,
        })
    }

    /// Results of completed episodes.
    pub fn results(&self) -> impl Iterator<Item = &GameResult> {
        self.events.iter().filter_map(|event| match event {
            BoardEvent::EpisodeEnd { result, .. } => Some(result),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl BoardObserver for EventLog {
    fn on_step(&mut self, board: &Board, action: Option<&Action>) {
        self.events.push(BoardEvent::Step {
            state: board.state_key(),
            action: action.copied(),
        });
    }

    fn on_episode_end(&mut self, board: &Board, result: &GameResult) {
        self.events.push(BoardEvent::EpisodeEnd {
            state: board.state_key(),
            result: *result,
        });
    }
}
