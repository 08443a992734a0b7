//! Episode driver and training loop.
//!
//! ## Overview
//!
//! - **play_episode**: Plays one board to a terminal position with one agent
//! - **Trajectory**: Records the transitions an agent was shown
//! - **Trainer**: Repeats episodes on fresh boards with an exploration schedule
//!
//! ## Usage
//!
//! ```rust
//! use peg_solitaire::agents::RandomAgent;
//! use peg_solitaire::observer::NoopObserver;
//! use peg_solitaire::training::{Trainer, TrainingConfig};
//! use peg_solitaire::BoardConfig;
//!
//! let trainer = Trainer::new(
//!     BoardConfig::triangle(5).with_hole(0, 0),
//!     TrainingConfig::default().with_episodes(10),
//! )?;
//!
//! let summary = trainer.run(&mut RandomAgent::new(42), &mut NoopObserver)?;
//! assert_eq!(summary.episodes, 10);
//! # Ok::<(), peg_solitaire::Error>(())
//! ```

pub mod episode;
pub mod trainer;
pub mod trajectory;

pub use episode::play_episode;
pub use trainer::{Trainer, TrainingConfig, TrainingSummary};
pub use trajectory::{Trajectory, Transition};
