//! Win lines: every row, every column, and both main diagonals.

use crate::Position;
use serde::{Deserialize, Serialize};
use strum::{EnumDiscriminants, EnumIter, IntoEnumIterator};

/// A full line of squares that wins when one marker fills it.
///
/// Variant order is scan order for win detection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, EnumDiscriminants,
)]
#[strum_discriminants(name(LineKind), derive(EnumIter, Hash))]
pub enum Line {
    /// Row by index.
    #[display("row {_0}")]
    Row(usize),
    /// Column by index.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// All lines of a board in scan order: rows, columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        LineKind::iter().flat_map(move |kind| match kind {
            LineKind::Row => (0..size).map(Line::Row).collect::<Vec<_>>(),
            LineKind::Column => (0..size).map(Line::Column).collect(),
            LineKind::Diagonal => vec![Line::Diagonal],
            LineKind::AntiDiagonal => vec![Line::AntiDiagonal],
        })
    }

    /// Returns which family of line this is.
    pub fn kind(self) -> LineKind {
        LineKind::from(self)
    }

    /// Positions covered by this line on a board of the given size.
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::Diagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }
}
