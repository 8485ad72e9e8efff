//! Validated board coordinates.

use serde::{Deserialize, Serialize};

/// A row/column pair known to lie inside some board.
///
/// Obtain one through [`Board::position`](crate::Board::position), which
/// performs the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a position without checking it against a board.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index into a board of the given size.
    pub(crate) fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }
}
