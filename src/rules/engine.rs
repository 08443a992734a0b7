//! Move generation, jump execution and reward signals.
//!
//! `GameEngine` owns one [`Board`] for one episode. It defines:
//! - What jumps are legal
//! - How a jump modifies the board
//! - Victory, terminal and reward conditions

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::board::{Board, StateKey};
use crate::core::{Action, BoardConfig};
use crate::error::{Error, Result};

/// Result of a finished episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Exactly one peg remains.
    Victory,
    /// No legal jump remains and more than one peg is left (or none at all).
    Stuck { remaining_pegs: usize },
}

impl GameResult {
    #[must_use]
    pub fn is_victory(&self) -> bool {
        matches!(self, GameResult::Victory)
    }

    /// Terminal reward on a board of the given size.
    #[must_use]
    pub fn reward(&self, size: usize) -> i64 {
        match self {
            GameResult::Victory => size as i64,
            GameResult::Stuck { remaining_pegs } => -(*remaining_pegs as i64),
        }
    }

    /// Pegs left on the board when the episode ended.
    #[must_use]
    pub fn remaining_pegs(&self) -> usize {
        match self {
            GameResult::Victory => 1,
            GameResult::Stuck { remaining_pegs } => *remaining_pegs,
        }
    }
}

/// Peg solitaire rules on a single board.
///
/// ## Example
///
/// ```
/// use peg_solitaire::core::BoardConfig;
/// use peg_solitaire::rules::GameEngine;
///
/// let mut engine = GameEngine::new(&BoardConfig::triangle(4).with_hole(1, 1)).unwrap();
/// let moves = engine.legal_moves();
/// assert_eq!(moves.len(), 2);
///
/// engine.jump(&moves[0]).unwrap();
/// assert_eq!(engine.remaining_pegs(), 8);
/// assert_eq!(engine.reward(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Build a fresh board and wrap it.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        Ok(Self::from_board(Board::new(config)?))
    }

    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// Read-only view of the board, for renderers and observers.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.board.num_cells()
    }

    /// Visit every legal jump in generation order until `visit` breaks.
    ///
    /// For each hole, each neighbour of the hole is a candidate jumpee and
    /// each neighbour of that jumpee a candidate jumper. The triple is a jump
    /// when the hole sits one step beyond the jumpee, opposite the jumper.
    /// Every physical jump has a single landing hole, so it is found once.
    fn scan_moves(&self, mut visit: impl FnMut(Action) -> ControlFlow<()>) -> ControlFlow<()> {
        let board = &self.board;

        for &hole_id in board.holes() {
            let Some(hole) = board.cell(hole_id) else { continue };

            for &jumpee_id in hole.neighbours() {
                let Some(jumpee) = board.cell(jumpee_id) else { continue };

                for &jumper_id in jumpee.neighbours() {
                    let Some(jumper) = board.cell(jumper_id) else { continue };

                    let step = jumper.coord() - jumpee.coord();
                    if hole.coord() == jumpee.coord() - step
                        && hole.is_empty()
                        && jumpee.has_peg()
                        && jumper.has_peg()
                    {
                        visit(Action::new(jumper_id, jumpee_id, hole_id))?;
                    }
                }
            }
        }

        ControlFlow::Continue(())
    }

    /// Enumerate all legal jumps on the current board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Action> {
        let mut moves = Vec::new();
        let flow = self.scan_moves(|action| {
            moves.push(action);
            ControlFlow::Continue(())
        });
        debug_assert!(flow.is_continue());
        moves
    }

    /// Is there at least one legal jump?
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.scan_moves(|_| ControlFlow::Break(())).is_break()
    }

    /// Check that `action` is legal on the current board.
    ///
    /// Accepts exactly the actions `legal_moves()` would return, without
    /// enumerating them.
    pub fn validate(&self, action: &Action) -> Result<()> {
        let board = &self.board;
        let (Some(jumper), Some(jumpee), Some(hole)) = (
            board.cell(action.jumper),
            board.cell(action.jumpee),
            board.cell(action.hole),
        ) else {
            return Err(Error::invalid_action(*action, "cell is not on this board"));
        };

        let step = jumpee.coord() - hole.coord();
        if !step.is_adjacent() {
            return Err(Error::invalid_action(*action, "jumpee is not adjacent to the hole"));
        }
        if jumper.coord() - jumpee.coord() != step {
            return Err(Error::invalid_action(*action, "cells are not in line"));
        }
        if !hole.is_empty() {
            return Err(Error::invalid_action(*action, "hole is occupied"));
        }
        if jumpee.is_empty() {
            return Err(Error::invalid_action(*action, "no peg to jump over"));
        }
        if jumper.is_empty() {
            return Err(Error::invalid_action(*action, "no peg to move"));
        }

        Ok(())
    }

    #[must_use]
    pub fn is_legal(&self, action: &Action) -> bool {
        self.validate(action).is_ok()
    }

    /// Execute a jump.
    ///
    /// The jumper and jumpee become holes and the hole gains a peg. Stale or
    /// fabricated actions are rejected with [`Error::InvalidAction`] and the
    /// board is left untouched. There is no undo.
    pub fn jump(&mut self, action: &Action) -> Result<()> {
        self.validate(action)?;
        self.board.apply_jump(action);
        Ok(())
    }

    /// Exactly one peg left.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.board.hole_count() + 1 == self.board.num_cells()
    }

    #[must_use]
    pub fn remaining_pegs(&self) -> usize {
        self.board.num_cells() - self.board.hole_count()
    }

    /// `+size` on victory, `-remaining_pegs` when stuck, otherwise `0`.
    #[must_use]
    pub fn reward(&self) -> i64 {
        match self.is_terminal() {
            Some(result) => result.reward(self.board.size()),
            None => 0,
        }
    }

    /// `Some` once the episode is over.
    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        if self.is_victory() {
            Some(GameResult::Victory)
        } else if !self.has_legal_moves() {
            Some(GameResult::Stuck {
                remaining_pegs: self.remaining_pegs(),
            })
        } else {
            None
        }
    }

    /// Canonical key of the current position.
    #[must_use]
    pub fn state_key(&self) -> StateKey {
        self.board.state_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellId, Coord};

    fn engine(config: BoardConfig) -> GameEngine {
        GameEngine::new(&config).unwrap()
    }

    fn id(engine: &GameEngine, row: i32, col: i32) -> CellId {
        engine.board().id_at(Coord::new(row, col)).unwrap()
    }

    #[test]
    fn test_triangle_four_opening() {
        let e = engine(BoardConfig::triangle(4).with_hole(1, 1));
        let moves = e.legal_moves();

        assert_eq!(
            moves,
            vec![
                Action::new(id(&e, 3, 3), id(&e, 2, 2), id(&e, 1, 1)),
                Action::new(id(&e, 3, 1), id(&e, 2, 1), id(&e, 1, 1)),
            ]
        );
        assert!(e.has_legal_moves());
        assert_eq!(e.is_terminal(), None);
        assert_eq!(e.reward(), 0);
    }

    #[test]
    fn test_triangle_four_after_first_jump() {
        let mut e = engine(BoardConfig::triangle(4).with_hole(1, 1));
        let first = e.legal_moves()[0];
        e.jump(&first).unwrap();

        assert_eq!(e.state_key().as_str(), "1111101110");
        assert_eq!(e.remaining_pegs(), 8);

        let labels: Vec<_> = e.legal_moves().iter().map(|a| e.board().describe(a)).collect();
        assert_eq!(labels, vec!["d->e->f", "a->c->f", "h->i->j"]);
    }

    #[test]
    fn test_triangle_five_top_hole() {
        let e = engine(BoardConfig::triangle(5).with_hole(0, 0));
        let labels: Vec<_> = e.legal_moves().iter().map(|a| e.board().describe(a)).collect();
        assert_eq!(labels, vec!["f->c->a", "d->b->a"]);
    }

    #[test]
    fn test_diamond_corner_hole() {
        let e = engine(BoardConfig::diamond(3).with_hole(0, 0));
        let labels: Vec<_> = e.legal_moves().iter().map(|a| e.board().describe(a)).collect();
        assert_eq!(labels, vec!["c->b->a", "i->e->a", "g->d->a"]);
    }

    #[test]
    fn test_diamond_centre_hole_is_stuck() {
        let e = engine(BoardConfig::diamond(3).with_hole(1, 1));

        assert!(e.legal_moves().is_empty());
        assert!(!e.has_legal_moves());
        assert_eq!(e.is_terminal(), Some(GameResult::Stuck { remaining_pegs: 8 }));
        assert_eq!(e.reward(), -8);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let e = engine(BoardConfig::triangle(4));
        assert!(e.legal_moves().is_empty());
        assert_eq!(e.reward(), -10);
    }

    #[test]
    fn test_stuck_with_two_pegs() {
        // Pegs d(2,0) and f(2,2) are not adjacent.
        let e = engine(BoardConfig::triangle(3).with_holes([(0, 0), (1, 0), (1, 1), (2, 1)]));

        assert_eq!(e.remaining_pegs(), 2);
        assert!(!e.is_victory());
        assert_eq!(e.is_terminal(), Some(GameResult::Stuck { remaining_pegs: 2 }));
        assert_eq!(e.reward(), -2);
    }

    #[test]
    fn test_victory() {
        // Pegs b(1,0) and d(2,0): d jumps b into a.
        let mut e = engine(BoardConfig::triangle(3).with_holes([(0, 0), (1, 1), (2, 1), (2, 2)]));
        let moves = e.legal_moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(e.board().describe(&moves[0]), "d->b->a");

        e.jump(&moves[0]).unwrap();

        assert!(e.is_victory());
        assert_eq!(e.remaining_pegs(), 1);
        assert_eq!(e.is_terminal(), Some(GameResult::Victory));
        assert_eq!(e.reward(), 3);
        assert!(e.legal_moves().is_empty());
    }

    #[test]
    fn test_single_peg_board_is_victory() {
        let e = engine(BoardConfig::triangle(1));
        assert!(e.is_victory());
        assert_eq!(e.reward(), 1);
    }

    #[test]
    fn test_jump_rejects_stale_action() {
        let mut e = engine(BoardConfig::triangle(4).with_hole(1, 1));
        let moves = e.legal_moves();
        e.jump(&moves[0]).unwrap();

        let before = e.state_key();
        let err = e.jump(&moves[1]).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { .. }));
        assert_eq!(e.state_key(), before);
        assert!(e.board().holes_consistent());
    }

    #[test]
    fn test_jump_rejects_malformed_actions() {
        let mut e = engine(BoardConfig::triangle(4).with_hole(1, 1));
        let a = id(&e, 0, 0);
        let c = id(&e, 1, 1);
        let f = id(&e, 2, 2);
        let j = id(&e, 3, 3);
        let g = id(&e, 3, 0);

        // Not on this board.
        assert!(e.jump(&Action::new(CellId(40), f, c)).is_err());
        // Jumpee not adjacent to hole.
        assert!(e.jump(&Action::new(j, g, c)).is_err());
        // Not in line: a and f are not both neighbours on one line through c.
        assert!(e.jump(&Action::new(a, f, c)).is_err());
        // Reversed direction onto an occupied cell.
        assert!(e.jump(&Action::new(c, f, j)).is_err());
        // Jumper is the hole itself.
        assert!(e.jump(&Action::new(c, c, c)).is_err());

        assert_eq!(e.state_key().as_str(), "1101111111");
        assert!(e.jump(&Action::new(j, f, c)).is_ok());
    }

    #[test]
    fn test_validate_matches_generator() {
        let e = engine(BoardConfig::diamond(4).with_holes([(1, 1), (2, 3)]));
        let legal = e.legal_moves();

        let n = e.num_cells() as u16;
        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let action = Action::new(CellId(x), CellId(y), CellId(z));
                    assert_eq!(e.is_legal(&action), legal.contains(&action), "{}", action);
                }
            }
        }
    }

    #[test]
    fn test_game_result_reward() {
        assert_eq!(GameResult::Victory.reward(5), 5);
        assert_eq!(GameResult::Stuck { remaining_pegs: 3 }.reward(5), -3);
        assert_eq!(GameResult::Victory.remaining_pegs(), 1);
        assert!(!GameResult::Stuck { remaining_pegs: 3 }.is_victory());
    }
}
