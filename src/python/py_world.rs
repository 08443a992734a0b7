//! Board simulation bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::analysis;
use crate::rules::GameEngine;

use super::py_core::{PyAction, PyBoardConfig};

/// Python wrapper for a single peg solitaire board.
///
/// Cells are addressed by id in construction order, row by row.
#[pyclass(name = "SimWorld")]
pub struct PySimWorld {
    config: PyBoardConfig,
    pub(crate) engine: GameEngine,
}

#[pymethods]
impl PySimWorld {
    /// Build a fresh board from a configuration.
    #[new]
    fn new(config: PyBoardConfig) -> PyResult<Self> {
        let engine = GameEngine::new(&config.0)?;
        Ok(Self { config, engine })
    }

    /// Restore the initial position.
    fn reset(&mut self) -> PyResult<()> {
        self.engine = GameEngine::new(&self.config.0)?;
        Ok(())
    }

    /// Get the board configuration.
    #[getter]
    fn config(&self) -> PyBoardConfig {
        self.config.clone()
    }

    /// Total number of cells.
    fn num_cells(&self) -> usize {
        self.engine.num_cells()
    }

    /// All legal jumps, in generation order.
    fn legal_moves(&self) -> Vec<PyAction> {
        self.engine.legal_moves().into_iter().map(PyAction).collect()
    }

    /// Apply a jump.
    ///
    /// Raises ValueError if the jump is not legal in the current position.
    fn jump(&mut self, action: &PyAction) -> PyResult<()> {
        self.engine.jump(&action.0)?;
        Ok(())
    }

    /// Reward for the current position: size on victory, minus the remaining
    /// pegs when stuck, 0 otherwise.
    fn reward(&self) -> i64 {
        self.engine.reward()
    }

    fn is_victory(&self) -> bool {
        self.engine.is_victory()
    }

    /// True when the game is won or no jump remains.
    fn is_terminal(&self) -> bool {
        self.engine.is_terminal().is_some()
    }

    fn remaining_pegs(&self) -> usize {
        self.engine.remaining_pegs()
    }

    /// Occupancy string: '1' for a peg, '0' for a hole.
    fn stringify(&self) -> String {
        self.engine.state_key().into_string()
    }

    /// Occupancy as a float array: 1.0 for a peg, 0.0 for a hole.
    fn occupancy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        let values: Vec<f32> = self
            .engine
            .board()
            .occupancy()
            .into_iter()
            .map(|peg| if peg { 1.0 } else { 0.0 })
            .collect();
        PyArray1::from_vec_bound(py, values)
    }

    /// Cell labels in id order.
    fn labels(&self) -> Vec<String> {
        self.engine
            .board()
            .cells()
            .iter()
            .map(|cell| cell.label().to_string())
            .collect()
    }

    /// Label-based text for a jump, e.g. "j->f->c".
    fn describe(&self, action: &PyAction) -> String {
        self.engine.board().describe(&action.0)
    }

    /// A winning line from the current position, or None.
    ///
    /// Exhaustive; only practical on small boards.
    fn solve(&self) -> Option<Vec<PyAction>> {
        analysis::solve(&self.engine).map(|line| line.into_iter().map(PyAction).collect())
    }

    fn __str__(&self) -> String {
        self.engine.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "SimWorld(shape='{}', size={}, pegs={})",
            self.config.0.shape.to_string().to_lowercase(),
            self.config.0.size,
            self.engine.remaining_pegs()
        )
    }
}
