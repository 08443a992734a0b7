//! Python agents and episode bindings.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::agents::Agent;
use crate::board::StateKey;
use crate::core::{Action, CellId};
use crate::observer::NoopObserver;
use crate::training::{self, Trajectory};

use super::py_core::PyAction;
use super::py_world::PySimWorld;

/// Never offered by the engine, so returning it stops the episode.
const ABORT: Action = Action::new(CellId(u16::MAX), CellId(u16::MAX), CellId(u16::MAX));

/// Adapts a Python object with `get_move` and optional `update` methods.
///
/// The first callback failure is kept and later raised to the caller; the
/// episode is stopped by answering with a move that is never legal.
struct PyAgent<'py> {
    agent: Bound<'py, PyAny>,
    has_update: bool,
    error: Option<PyErr>,
}

impl<'py> PyAgent<'py> {
    fn new(agent: Bound<'py, PyAny>) -> PyResult<Self> {
        let has_update = agent.hasattr("update")?;
        Ok(Self {
            agent,
            has_update,
            error: None,
        })
    }
}

impl Agent for PyAgent<'_> {
    fn get_move(
        &mut self,
        state: &StateKey,
        moves: &[Action],
        exploration_rate: f64,
        choose_best: bool,
    ) -> Action {
        if self.error.is_some() {
            return ABORT;
        }

        let offered: Vec<PyAction> = moves.iter().copied().map(PyAction).collect();
        let result = self
            .agent
            .call_method1("get_move", (state.as_str(), offered, exploration_rate, choose_best))
            .and_then(|chosen| chosen.extract::<PyAction>());

        match result {
            Ok(chosen) => chosen.0,
            Err(err) => {
                self.error = Some(err);
                ABORT
            }
        }
    }

    fn update(&mut self, prev_state: &StateKey, action: &Action, reward: i64, new_state: &StateKey) {
        if !self.has_update || self.error.is_some() {
            return;
        }

        let result = self.agent.call_method1(
            "update",
            (prev_state.as_str(), PyAction(*action), reward, new_state.as_str()),
        );
        if let Err(err) = result {
            self.error = Some(err);
        }
    }
}

/// Python wrapper for a finished episode.
#[pyclass(name = "Trajectory")]
#[derive(Clone, Debug)]
pub struct PyTrajectory(pub Trajectory);

#[pymethods]
impl PyTrajectory {
    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Jumps in play order.
    fn actions(&self) -> Vec<PyAction> {
        self.0.actions().copied().map(PyAction).collect()
    }

    /// Reward observed after each jump.
    fn rewards(&self) -> Vec<i64> {
        self.0.transitions.iter().map(|t| t.reward).collect()
    }

    /// Positions visited, starting with the initial one.
    fn states(&self) -> Vec<String> {
        std::iter::once(&self.0.initial_state)
            .chain(self.0.transitions.iter().map(|t| &t.new_state))
            .map(|key| key.as_str().to_string())
            .collect()
    }

    #[getter]
    fn is_victory(&self) -> bool {
        self.0.result.is_victory()
    }

    #[getter]
    fn remaining_pegs(&self) -> usize {
        self.0.result.remaining_pegs()
    }

    #[getter]
    fn final_reward(&self) -> i64 {
        self.0.final_reward()
    }

    /// Encode as bytes.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.0.to_bytes()?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Decode from bytes produced by `to_bytes`.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        Ok(Self(Trajectory::from_bytes(bytes)?))
    }

    fn __repr__(&self) -> String {
        format!(
            "Trajectory(jumps={}, remaining_pegs={}, final_reward={})",
            self.0.len(),
            self.0.result.remaining_pegs(),
            self.0.final_reward()
        )
    }
}

/// Play `world` to a terminal position with a Python agent.
///
/// `agent` must provide `get_move(state, moves, exploration_rate,
/// choose_best)` returning one of `moves`, and may provide
/// `update(prev_state, action, reward, new_state)`. Exceptions raised by
/// either method propagate; returning a move that was not offered raises
/// ValueError.
#[pyfunction]
#[pyo3(signature = (world, agent, exploration_rate = 0.0, choose_best = false))]
pub fn play_episode(
    mut world: PyRefMut<'_, PySimWorld>,
    agent: Bound<'_, PyAny>,
    exploration_rate: f64,
    choose_best: bool,
) -> PyResult<PyTrajectory> {
    let mut agent = PyAgent::new(agent)?;
    let result = training::play_episode(
        &mut world.engine,
        &mut agent,
        &mut NoopObserver,
        exploration_rate,
        choose_best,
    );

    if let Some(err) = agent.error.take() {
        return Err(err);
    }
    Ok(PyTrajectory(result?))
}
