//! Board construction, adjacency and occupancy tracking.

use std::collections::BTreeSet;

use crate::core::{Action, BoardConfig, Cell, CellId, Coord, Shape, HEX_OFFSETS};
use crate::error::Result;

use super::state_key::StateKey;

/// A peg solitaire board.
///
/// Owns every cell. Topology is fixed once `new` returns; afterwards only
/// occupancy changes, through [`GameEngine::jump`](crate::rules::GameEngine::jump).
///
/// ## Invariants
///
/// - `holes` is exactly the set of cells with `is_empty() == true`.
/// - `cells.len() == shape.cell_count(size)`.
/// - `cells[i].id() == CellId(i)`, in row-major order.
#[derive(Clone, Debug)]
pub struct Board {
    shape: Shape,
    size: usize,
    cells: Vec<Cell>,
    /// Ordered so that move generation is deterministic.
    holes: BTreeSet<CellId>,
}

impl Board {
    /// Build a board from its configuration.
    ///
    /// Fails with a configuration error for size 0 or out-of-bounds holes.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        config.validate()?;

        let shape = config.shape;
        let size = config.size;
        let empties: BTreeSet<Coord> = config.holes.iter().map(|&hole| Coord::from(hole)).collect();

        let mut cells = Vec::with_capacity(config.cell_count());
        for row in 0..size {
            for col in 0..shape.row_len(size, row) {
                let coord = Coord::from((row, col));
                let id = CellId::new(cells.len() as u16);
                cells.push(Cell::new(id, coord, empties.contains(&coord)));
            }
        }

        let holes = cells.iter().filter(|c| c.is_empty()).map(Cell::id).collect();
        let mut board = Self {
            shape,
            size,
            cells,
            holes,
        };
        board.link_neighbours();

        Ok(board)
    }

    fn link_neighbours(&mut self) {
        for index in 0..self.cells.len() {
            let coord = self.cells[index].coord();
            for offset in HEX_OFFSETS {
                if let Some(neighbour) = self.id_at(coord + offset) {
                    self.cells[index].push_neighbour(neighbour);
                }
            }
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// All cells in construction order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells grouped by row, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let mut start = 0;
        (0..self.size).map(move |row| {
            let len = self.shape.row_len(self.size, row);
            let slice = &self.cells[start..start + len];
            start += len;
            slice
        })
    }

    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Id of the cell at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn id_at(&self, coord: Coord) -> Option<CellId> {
        self.shape
            .index_of(self.size, coord)
            .map(|index| CellId::new(index as u16))
    }

    #[must_use]
    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.id_at(coord).and_then(|id| self.cell(id))
    }

    /// Currently empty cells, in ascending id order.
    #[must_use]
    pub fn holes(&self) -> &BTreeSet<CellId> {
        &self.holes
    }

    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.holes.len()
    }

    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells.len() - self.holes.len()
    }

    /// Is `id` a cell on this board holding a peg?
    #[must_use]
    pub fn has_peg(&self, id: CellId) -> bool {
        self.cell(id).is_some_and(Cell::has_peg)
    }

    /// Is `id` a cell on this board that is empty?
    #[must_use]
    pub fn is_hole(&self, id: CellId) -> bool {
        self.cell(id).is_some_and(Cell::is_empty)
    }

    /// Per-cell occupancy in construction order (`true` = peg).
    #[must_use]
    pub fn occupancy(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::has_peg).collect()
    }

    /// Canonical occupancy key.
    #[must_use]
    pub fn state_key(&self) -> StateKey {
        StateKey::from_occupancy(self.cells.iter().map(Cell::has_peg))
    }

    /// Label-based description of a jump, e.g. `j->f->c`.
    #[must_use]
    pub fn describe(&self, action: &Action) -> String {
        let label = |id: CellId| self.cell(id).map_or("?", Cell::label);
        format!(
            "{}->{}->{}",
            label(action.jumper),
            label(action.jumpee),
            label(action.hole)
        )
    }

    /// Check the hole-set invariant.
    #[must_use]
    pub fn holes_consistent(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_empty() == self.holes.contains(&cell.id()))
    }

    /// Move the pegs of an already validated jump.
    pub(crate) fn apply_jump(&mut self, action: &Action) {
        self.cells[action.jumper.index()].set_empty(true);
        self.cells[action.jumpee.index()].set_empty(true);
        self.cells[action.hole.index()].set_empty(false);

        self.holes.remove(&action.hole);
        self.holes.insert(action.jumper);
        self.holes.insert(action.jumpee);

        debug_assert!(self.holes_consistent());
    }
}

impl std::fmt::Display for Board {
    /// One line per row, `o` for a peg and `.` for a hole. Rows are indented
    /// so that lattice neighbours line up diagonally.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            let indent = self.size - 1 - row;
            let line: Vec<&str> = cells
                .iter()
                .map(|c| if c.has_peg() { "o" } else { "." })
                .collect();
            writeln!(f, "{}{}", " ".repeat(indent), line.join(" "))?;
        }
        Ok(())
    }
}
