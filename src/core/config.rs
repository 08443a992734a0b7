//! Board configuration types.
//!
//! Boards are configured at construction by providing:
//! - `Shape`: the grid geometry (triangle or diamond)
//! - `size`: rows for a triangle, side length for a diamond
//! - `holes`: the initially empty coordinates
//!
//! All validation happens in [`BoardConfig::validate`], which
//! [`Board::new`](crate::board::Board::new) calls before building anything.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::coord::Coord;
use crate::board::Board;
use crate::error::{Error, Result};

/// Board geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// `size` rows, row `i` holding `i + 1` cells.
    Triangle,
    /// `size` x `size` cells.
    Diamond,
}

impl Shape {
    /// Total number of cells on a board of this shape.
    #[must_use]
    pub const fn cell_count(self, size: usize) -> usize {
        match self {
            Shape::Triangle => size * (size + 1) / 2,
            Shape::Diamond => size * size,
        }
    }

    /// Number of cells in `row`.
    #[must_use]
    pub const fn row_len(self, size: usize, row: usize) -> usize {
        match self {
            Shape::Triangle => row + 1,
            Shape::Diamond => size,
        }
    }

    /// Bounds predicate for the grid.
    #[must_use]
    pub fn contains(self, size: usize, coord: Coord) -> bool {
        let size = size as i32;
        if coord.row < 0 || coord.row >= size || coord.col < 0 {
            return false;
        }
        match self {
            Shape::Triangle => coord.col <= coord.row,
            Shape::Diamond => coord.col < size,
        }
    }

    /// Row-major index of `coord`, or `None` if it is outside the grid.
    #[must_use]
    pub fn index_of(self, size: usize, coord: Coord) -> Option<usize> {
        if !self.contains(size, coord) {
            return None;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);
        Some(match self {
            Shape::Triangle => row * (row + 1) / 2 + col,
            Shape::Diamond => row * size + col,
        })
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triangle" => Ok(Shape::Triangle),
            "diamond" => Ok(Shape::Diamond),
            _ => Err(Error::UnknownShape { tag: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Triangle => write!(f, "Triangle"),
            Shape::Diamond => write!(f, "Diamond"),
        }
    }
}

/// Everything needed to construct a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub shape: Shape,

    /// Rows (triangle) or side length (diamond). Must be at least 1.
    pub size: usize,

    /// Initially empty cells as `(row, col)`. Duplicates are ignored.
    pub holes: Vec<(usize, usize)>,
}

impl BoardConfig {
    /// Create a configuration with no initial holes.
    pub fn new(shape: Shape, size: usize) -> Self {
        Self {
            shape,
            size,
            holes: Vec::new(),
        }
    }

    /// Triangle board with `size` rows.
    pub fn triangle(size: usize) -> Self {
        Self::new(Shape::Triangle, size)
    }

    /// Diamond board with `size` x `size` cells.
    pub fn diamond(size: usize) -> Self {
        Self::new(Shape::Diamond, size)
    }

    /// Parse the shape from a tag such as `"Triangle"`.
    pub fn from_tag(tag: &str, size: usize) -> Result<Self> {
        Ok(Self::new(tag.parse()?, size))
    }

    /// Add an initial hole.
    #[must_use]
    pub fn with_hole(mut self, row: usize, col: usize) -> Self {
        self.holes.push((row, col));
        self
    }

    /// Add several initial holes.
    #[must_use]
    pub fn with_holes(mut self, holes: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.holes.extend(holes);
        self
    }

    /// Total number of cells the board will have.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.shape.cell_count(self.size)
    }

    /// Check size and hole coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > u16::MAX as usize {
            return Err(Error::InvalidSize { size: self.size });
        }
        if self.cell_count() > u16::MAX as usize {
            return Err(Error::InvalidSize { size: self.size });
        }
        for &(row, col) in &self.holes {
            if row >= self.size || col >= self.shape.row_len(self.size, row) {
                return Err(Error::HoleOutOfBounds {
                    row,
                    col,
                    shape: self.shape,
                    size: self.size,
                });
            }
        }
        Ok(())
    }

    /// Build the board.
    pub fn build(&self) -> Result<Board> {
        Board::new(self)
    }
}
