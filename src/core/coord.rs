//! Grid coordinates and the hex adjacency offsets.
//!
//! Both board shapes live on the same skewed hex lattice: a cell at
//! `(row, col)` touches the six cells reached by [`HEX_OFFSETS`].
//!
//! ```
//! use peg_solitaire::core::{Coord, Offset, HEX_OFFSETS};
//!
//! let c = Coord::new(2, 1);
//! assert_eq!(c + Offset::new(1, 1), Coord::new(3, 2));
//! assert_eq!(Coord::new(3, 2) - c, Offset::new(1, 1));
//! assert!(HEX_OFFSETS.contains(&Offset::new(-1, -1)));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// A `(row, col)` position on the board lattice.
///
/// Signed so that offset arithmetic can step outside the grid; bounds are
/// checked by the board shape before any lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as i32, col as i32)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Difference between two coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub d_row: i32,
    pub d_col: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Is this one of the six adjacency offsets?
    #[must_use]
    pub fn is_adjacent(self) -> bool {
        HEX_OFFSETS.contains(&self)
    }
}

/// The six adjacency offsets, in neighbour-list order.
pub const HEX_OFFSETS: [Offset; 6] = [
    Offset::new(0, 1),
    Offset::new(1, 1),
    Offset::new(1, 0),
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 0),
];

impl Add<Offset> for Coord {
    type Output = Coord;

    fn add(self, rhs: Offset) -> Coord {
        Coord::new(self.row + rhs.d_row, self.col + rhs.d_col)
    }
}

impl Sub<Offset> for Coord {
    type Output = Coord;

    fn sub(self, rhs: Offset) -> Coord {
        Coord::new(self.row - rhs.d_row, self.col - rhs.d_col)
    }
}

impl Sub for Coord {
    type Output = Offset;

    fn sub(self, rhs: Coord) -> Offset {
        Offset::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Offset {
    type Output = Offset;

    fn neg(self) -> Offset {
        Offset::new(-self.d_row, -self.d_col)
    }
}
