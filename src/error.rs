//! Error types for the peg solitaire crate.

use thiserror::Error;

use crate::core::{Action, Shape};

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown board shape '{tag}' (expected 'Triangle' or 'Diamond')")]
    UnknownShape { tag: String },

    #[error("invalid board size {size}")]
    InvalidSize { size: usize },

    #[error("initial hole ({row}, {col}) is outside a {shape} board of size {size}")]
    HoleOutOfBounds {
        row: usize,
        col: usize,
        shape: Shape,
        size: usize,
    },

    #[error("invalid action {action}: {reason}")]
    InvalidAction { action: Action, reason: String },

    #[error("corrupt trajectory: {reason}")]
    CorruptTrajectory { reason: String },

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl Error {
    /// True for errors raised while constructing a board.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownShape { .. } | Error::InvalidSize { .. } | Error::HoleOutOfBounds { .. }
        )
    }

    pub(crate) fn invalid_action(action: Action, reason: impl Into<String>) -> Self {
        Error::InvalidAction {
            action,
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
