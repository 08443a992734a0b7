//! Single-episode driver.
//!
//! The engine drives the loop; the agent only chooses among offered jumps
//! and learns from the transitions it is shown.

use crate::agents::Agent;
use crate::error::{Error, Result};
use crate::observer::BoardObserver;
use crate::rules::{GameEngine, GameResult};

use super::trajectory::{Trajectory, Transition};

/// Play one episode to a terminal position.
///
/// While legal jumps exist: snapshot the position, ask the agent for a move,
/// apply it, compute the new position and reward, and forward all four to
/// `agent.update`. The observer sees the board before and after every jump
/// and once more at the end.
///
/// Fails with [`Error::InvalidAction`] if the agent returns a move that was
/// not offered. The engine is left in the position reached so far.
pub fn play_episode<A, O>(
    engine: &mut GameEngine,
    agent: &mut A,
    observer: &mut O,
    exploration_rate: f64,
    choose_best: bool,
) -> Result<Trajectory>
where
    A: Agent + ?Sized,
    O: BoardObserver + ?Sized,
{
    let initial_state = engine.state_key();
    let mut transitions = Vec::new();

    loop {
        let moves = engine.legal_moves();
        if moves.is_empty() {
            break;
        }

        let prev_state = engine.state_key();
        let action = agent.get_move(&prev_state, &moves, exploration_rate, choose_best);
        if !moves.contains(&action) {
            return Err(Error::invalid_action(action, "agent chose a move that was not offered"));
        }

        observer.on_step(engine.board(), Some(&action));
        engine.jump(&action)?;
        observer.on_step(engine.board(), None);

        let new_state = engine.state_key();
        let reward = engine.reward();
        agent.update(&prev_state, &action, reward, &new_state);
        transitions.push(Transition::new(prev_state, action, reward, new_state));

        if engine.is_victory() {
            break;
        }
    }

    let result = if engine.is_victory() {
        GameResult::Victory
    } else {
        GameResult::Stuck {
            remaining_pegs: engine.remaining_pegs(),
        }
    };
    observer.on_episode_end(engine.board(), &result);

    let board = engine.board();
    Ok(Trajectory {
        shape: board.shape(),
        size: board.size(),
        initial_state,
        transitions,
        result,
    })
}
