//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, BoardConfig, CellId};
use crate::error::Error;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Create an action from three cell ids.
    #[new]
    fn new(jumper: u16, jumpee: u16, hole: u16) -> Self {
        Self(Action::new(CellId(jumper), CellId(jumpee), CellId(hole)))
    }

    #[getter]
    fn jumper(&self) -> u16 {
        self.0.jumper.0
    }

    #[getter]
    fn jumpee(&self) -> u16 {
        self.0.jumpee.0
    }

    #[getter]
    fn hole(&self) -> u16 {
        self.0.hole.0
    }

    /// Get `(jumper, jumpee, hole)` as a tuple.
    fn cells(&self) -> (u16, u16, u16) {
        (self.0.jumper.0, self.0.jumpee.0, self.0.hole.0)
    }

    fn __repr__(&self) -> String {
        format!(
            "Action(jumper={}, jumpee={}, hole={})",
            self.0.jumper.0, self.0.jumpee.0, self.0.hole.0
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        let [a, b, c] = self.0.cells();
        (a.0 as u64) << 32 | (b.0 as u64) << 16 | c.0 as u64
    }
}

/// Python wrapper for BoardConfig.
#[pyclass(name = "BoardConfig")]
#[derive(Clone, Debug)]
pub struct PyBoardConfig(pub BoardConfig);

#[pymethods]
impl PyBoardConfig {
    /// Create a board configuration.
    ///
    /// # Arguments
    /// - shape: "triangle" or "diamond" (case-insensitive)
    /// - size: Number of rows
    /// - holes: Initially empty cells as (row, col) pairs
    #[new]
    #[pyo3(signature = (shape, size, holes = Vec::new()))]
    fn new(shape: &str, size: usize, holes: Vec<(usize, usize)>) -> PyResult<Self> {
        let config = BoardConfig::from_tag(shape, size)?.with_holes(holes);
        config.validate()?;
        Ok(Self(config))
    }

    #[getter]
    fn shape(&self) -> String {
        self.0.shape.to_string().to_lowercase()
    }

    #[getter]
    fn size(&self) -> usize {
        self.0.size
    }

    #[getter]
    fn holes(&self) -> Vec<(usize, usize)> {
        self.0.holes.clone()
    }

    /// Total number of cells on the board.
    fn cell_count(&self) -> usize {
        self.0.cell_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardConfig(shape='{}', size={}, holes={:?})",
            self.shape(),
            self.0.size,
            self.0.holes
        )
    }
}
