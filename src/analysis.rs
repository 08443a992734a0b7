//! Exhaustive search over small boards.
//!
//! Peg solitaire positions only ever lose pegs, so the reachable state graph
//! is a finite DAG. On boards of up to roughly twenty cells it can be walked
//! completely, which gives:
//! - Reachable, terminal and winning position counts
//! - Solvability, with an explicit winning line
//! - A cross-check of [`GameEngine::legal_moves`] against the plain geometric
//!   enumeration of jumps on every reachable position
//!
//! States are deduplicated by [`StateKey`] in an `FxHashSet`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::StateKey;
use crate::core::{Action, HEX_OFFSETS};
use crate::rules::GameEngine;

/// Counts gathered by [`explore`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationReport {
    /// Distinct positions reachable from the start, the start included.
    pub reachable_states: usize,

    /// Reachable positions with no legal jump, or already won.
    pub terminal_states: usize,

    /// Reachable positions with exactly one peg.
    pub winning_states: usize,

    /// Positions where `legal_moves()` disagreed with [`direct_moves`].
    pub generator_mismatches: usize,
}

impl ExplorationReport {
    /// Can a single peg be reached from the start?
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.winning_states > 0
    }
}

/// Enumerate jumps directly from geometry.
///
/// For every hole `h` and canonical offset `e`, `(h + 2e, h + e, h)` is a jump
/// when both cells exist and hold pegs. Holes are visited in ascending id and
/// offsets in canonical order, which is also the order `legal_moves()` uses.
#[must_use]
pub fn direct_moves(engine: &GameEngine) -> Vec<Action> {
    let board = engine.board();
    let mut moves = Vec::new();

    for &hole_id in board.holes() {
        let Some(hole) = board.cell(hole_id) else { continue };

        for offset in HEX_OFFSETS {
            let jumpee = board.id_at(hole.coord() + offset);
            let jumper = board.id_at(hole.coord() + offset + offset);
            if let (Some(jumpee), Some(jumper)) = (jumpee, jumper) {
                if board.has_peg(jumpee) && board.has_peg(jumper) {
                    moves.push(Action::new(jumper, jumpee, hole_id));
                }
            }
        }
    }

    moves
}

/// Walk every position reachable from `engine`'s current position.
///
/// The engine itself is not modified.
#[must_use]
pub fn explore(engine: &GameEngine) -> ExplorationReport {
    let mut report = ExplorationReport::default();
    let mut seen: FxHashSet<StateKey> = FxHashSet::default();
    let mut stack = vec![engine.clone()];
    seen.insert(engine.state_key());

    while let Some(current) = stack.pop() {
        report.reachable_states += 1;

        let moves = current.legal_moves();
        if moves != direct_moves(&current) {
            report.generator_mismatches += 1;
        }

        if current.is_victory() {
            report.winning_states += 1;
            report.terminal_states += 1;
            continue;
        }
        if moves.is_empty() {
            report.terminal_states += 1;
            continue;
        }

        for action in &moves {
            let mut next = current.clone();
            if next.jump(action).is_err() {
                continue;
            }
            if seen.insert(next.state_key()) {
                stack.push(next);
            }
        }
    }

    report
}

/// Find a sequence of jumps that leaves a single peg.
///
/// Depth-first in generation order, remembering positions already shown to
/// be dead ends. Returns `None` if the position cannot be won. A position
/// that is already won yields an empty line.
#[must_use]
pub fn solve(engine: &GameEngine) -> Option<Vec<Action>> {
    let mut dead = FxHashSet::default();
    let mut line = Vec::new();
    search(engine, &mut dead, &mut line).then_some(line)
}

fn search(engine: &GameEngine, dead: &mut FxHashSet<StateKey>, line: &mut Vec<Action>) -> bool {
    if engine.is_victory() {
        return true;
    }

    for action in engine.legal_moves() {
        let mut next = engine.clone();
        if next.jump(&action).is_err() {
            continue;
        }

        let key = next.state_key();
        if dead.contains(&key) {
            continue;
        }

        line.push(action);
        if search(&next, dead, line) {
            return true;
        }
        line.pop();
        dead.insert(key);
    }

    false
}
