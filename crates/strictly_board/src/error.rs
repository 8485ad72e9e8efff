//! Error types for board operations.

use crate::Marker;

/// Error returned by board construction, coordinate access, and placement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A row or column index fell outside `[0, size)`.
    #[display("Coordinates ({row}, {col}) are outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Board dimension.
        size: usize,
    },

    /// Strict placement hit a square that already holds a marker.
    #[display("Square ({row}, {col}) is already occupied by {existing}")]
    CellOccupied {
        /// Row of the occupied square.
        row: usize,
        /// Column of the occupied square.
        col: usize,
        /// Marker already on the square.
        existing: Marker,
    },

    /// A board must be at least 1x1.
    #[display("Board size must be at least 1, got {_0}")]
    InvalidSize(usize),

    /// The requested board would exceed the supported dimension.
    #[display("Board size {size} exceeds the maximum of {max}")]
    TooLarge {
        /// Requested dimension.
        size: usize,
        /// Largest supported dimension.
        max: usize,
    },

    /// Rows supplied for a board do not form a square grid.
    #[display("Expected {expected} squares in a row, found {found}")]
    DimensionMismatch {
        /// Squares required per row.
        expected: usize,
        /// Squares actually supplied.
        found: usize,
    },

    /// A marker must be exactly one visible character.
    #[display("Invalid marker: {_0:?}")]
    InvalidMarker(String),
}

impl std::error::Error for BoardError {}
