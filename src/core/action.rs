//! Jump representation.
//!
//! An action names the three cells of a jump by id. The ids only mean
//! something relative to the board that produced them, so actions should not
//! outlive the position they were generated for.

use serde::{Deserialize, Serialize};

use super::cell::CellId;

/// A jump: `jumper` leaps over `jumpee` into the empty `hole`.
///
/// ## Example
///
/// ```
/// use peg_solitaire::core::{Action, CellId};
///
/// let action = Action::new(CellId(9), CellId(5), CellId(2));
/// assert_eq!(action.cells(), [CellId(9), CellId(5), CellId(2)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// The peg that moves.
    pub jumper: CellId,

    /// The peg that is removed.
    pub jumpee: CellId,

    /// The empty cell the jumper lands in.
    pub hole: CellId,
}

impl Action {
    /// Create a new action.
    #[must_use]
    pub const fn new(jumper: CellId, jumpee: CellId, hole: CellId) -> Self {
        Self { jumper, jumpee, hole }
    }

    /// The three cells in `(jumper, jumpee, hole)` order.
    #[must_use]
    pub const fn cells(&self) -> [CellId; 3] {
        [self.jumper, self.jumpee, self.hole]
    }

    /// Check that the three cells are distinct.
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        self.jumper != self.jumpee && self.jumpee != self.hole && self.jumper != self.hole
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}->{}", self.jumper.0, self.jumpee.0, self.hole.0)
    }
}
