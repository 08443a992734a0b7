//! Python bindings for the peg solitaire engine.
//!
//! # Quick Start
//!
//! ```python
//! import peg_solitaire as ps
//!
//! config = ps.BoardConfig("triangle", 5, holes=[(0, 0)])
//! world = ps.SimWorld(config)
//!
//! class FirstMove:
//!     def get_move(self, state, moves, exploration_rate, choose_best):
//!         return moves[0]
//!
//!     def update(self, prev_state, action, reward, new_state):
//!         pass
//!
//! trajectory = ps.play_episode(world, FirstMove())
//! print(trajectory.remaining_pegs, world.stringify())
//! ```

use pyo3::prelude::*;

mod py_agent;
mod py_core;
mod py_world;

pub use py_agent::*;
pub use py_core::*;
pub use py_world::*;

/// peg_solitaire: hex-connected peg solitaire boards for agent training.
///
/// This module provides:
/// - Board configuration and jump actions
/// - A simulation world with legal moves, rewards and numpy occupancy
/// - An episode driver calling back into Python agents
#[pymodule]
fn peg_solitaire(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyAction>()?;
    m.add_class::<PyBoardConfig>()?;

    // Simulation
    m.add_class::<PySimWorld>()?;
    m.add_class::<PyTrajectory>()?;
    m.add_function(wrap_pyfunction!(play_episode, m)?)?;

    Ok(())
}
