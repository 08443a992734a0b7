//! Board cells and their identifiers.
//!
//! Every cell has a `CellId` equal to its index in construction order
//! (row-major). Neighbours are stored as ids and resolved through the
//! owning [`Board`](crate::board::Board), so cells never point at each other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;

/// Identifier of a cell within one board.
///
/// Ids are dense indices in construction order, so they double as positions
/// in the occupancy vector used by [`StateKey`](crate::board::StateKey).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u16);

impl CellId {
    /// Create a new cell ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the index into the board's cell vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Display label for the cell at `index`: `a`..`z`, then `aa`, `ab`, ...
#[must_use]
pub fn cell_label(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// A single board position.
///
/// Topology (`coord`, `neighbours`) is fixed at construction. Only the
/// occupancy flag changes, and only the board may change it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    label: String,
    coord: Coord,
    empty: bool,
    /// At most six neighbours on the hex lattice.
    neighbours: SmallVec<[CellId; 6]>,
}

impl Cell {
    pub(crate) fn new(id: CellId, coord: Coord, empty: bool) -> Self {
        Self {
            id,
            label: cell_label(id.index()),
            coord,
            empty,
            neighbours: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Stable display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// True if this cell is a hole.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// True if this cell holds a peg.
    #[must_use]
    pub fn has_peg(&self) -> bool {
        !self.empty
    }

    /// Neighbour ids in hex-offset order.
    #[must_use]
    pub fn neighbours(&self) -> &[CellId] {
        &self.neighbours
    }

    pub(crate) fn set_empty(&mut self, empty: bool) {
        self.empty = empty;
    }

    pub(crate) fn push_neighbour(&mut self, id: CellId) {
        self.neighbours.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(cell_label(0), "a");
        assert_eq!(cell_label(9), "j");
        assert_eq!(cell_label(25), "z");
        assert_eq!(cell_label(26), "aa");
        assert_eq!(cell_label(27), "ab");
        assert_eq!(cell_label(51), "az");
        assert_eq!(cell_label(52), "ba");
        assert_eq!(cell_label(701), "zz");
        assert_eq!(cell_label(702), "aaa");
    }

    #[test]
    fn test_labels_unique() {
        let labels: std::collections::HashSet<_> = (0..1000).map(cell_label).collect();
        assert_eq!(labels.len(), 1000);
    }

    #[test]
    fn test_cell_accessors() {
        let mut cell = Cell::new(CellId::new(4), Coord::new(2, 1), false);
        assert_eq!(cell.id(), CellId::new(4));
        assert_eq!(cell.label(), "e");
        assert_eq!(cell.coord(), Coord::new(2, 1));
        assert!(cell.has_peg());
        assert!(cell.neighbours().is_empty());

        cell.set_empty(true);
        cell.push_neighbour(CellId::new(1));
        assert!(cell.is_empty());
        assert_eq!(cell.neighbours(), &[CellId::new(1)]);
    }
}
