//! # peg-solitaire
//!
//! Peg solitaire on hex-connected triangle and diamond boards, built as a
//! simulation backend for reinforcement-learning agents.
//!
//! ## Design Principles
//!
//! 1. **Engine-Driven**: The engine enumerates legal jumps and drives the
//!    episode. Agents only choose among offered jumps and learn from the
//!    transitions they are shown.
//!
//! 2. **Explicit Topology**: Cells are addressed by [`CellId`]. Neighbour
//!    lists come from six hex offsets intersected with explicit bounds
//!    predicates, so no indexing ever wraps or panics.
//!
//! 3. **Deterministic**: Move order, state keys and seeded agents are fully
//!    reproducible.
//!
//! ## Modules
//!
//! - `core`: Coordinates, cells, actions, board configuration, RNG
//! - `board`: Board topology, occupancy and canonical state keys
//! - `rules`: Move generation, jump execution, terminal and reward evaluation
//! - `agents`: Agent contract and reference agents
//! - `observer`: Read-only episode observation
//! - `training`: Episode driver, trajectories and the multi-episode trainer
//! - `analysis`: Exhaustive search and solving on small boards
//!
//! ## Example
//!
//! ```
//! use peg_solitaire::{BoardConfig, GameEngine};
//!
//! let mut engine = GameEngine::new(&BoardConfig::triangle(4).with_hole(1, 1))?;
//! assert_eq!(engine.state_key().as_str(), "1101111111");
//!
//! let first = engine.legal_moves()[0];
//! assert_eq!(engine.board().describe(&first), "j->f->c");
//!
//! engine.jump(&first)?;
//! assert_eq!(engine.state_key().as_str(), "1111101110");
//! # Ok::<(), peg_solitaire::Error>(())
//! ```

pub mod core;
pub mod error;
pub mod board;
pub mod rules;
pub mod agents;
pub mod observer;
pub mod training;
pub mod analysis;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Coord, Offset, HEX_OFFSETS,
    Cell, CellId, Action,
    BoardConfig, Shape,
    GameRng,
};

pub use crate::error::{Error, Result};

pub use crate::board::{Board, StateKey};

pub use crate::rules::{GameEngine, GameResult};

pub use crate::agents::{Agent, IndexAgent, RandomAgent};

pub use crate::observer::{BoardEvent, BoardObserver, EventLog, NoopObserver};

pub use crate::training::{
    play_episode,
    Trainer, TrainingConfig, TrainingSummary,
    Trajectory, Transition,
};

pub use crate::analysis::ExplorationReport;
