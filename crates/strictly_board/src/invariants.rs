//! Board invariants.
//!
//! State invariants hold for any single board; transition invariants relate
//! a board before and after a mutation. Mutating operations check both with
//! `debug_assert!`.

use crate::{Board, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A property relating a state before and after a mutation.
pub trait TransitionInvariant<S> {
    /// Checks if the invariant holds across the transition.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the board is at least 1x1.
pub struct PositiveSize;

impl Invariant<Board> for PositiveSize {
    fn holds(board: &Board) -> bool {
        board.size() >= 1
    }

    fn description() -> &'static str {
        "Board size is at least 1"
    }
}

/// Invariant: the board holds exactly `size * size` squares.
pub struct SquareGrid;

impl Invariant<Board> for SquareGrid {
    fn holds(board: &Board) -> bool {
        let expected = board.size() * board.size();
        let found = board.squares().len();
        let valid = found == expected;
        if !valid {
            warn!(expected, found, "Square grid violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Board holds size * size squares"
    }
}

/// Invariant: a placed marker never changes or disappears.
pub struct MarkersMonotonic;

impl TransitionInvariant<Board> for MarkersMonotonic {
    fn holds(before: &Board, after: &Board) -> bool {
        before.size() == after.size()
            && before
                .squares()
                .iter()
                .zip(after.squares())
                .all(|(old, new)| *old == Square::Empty || old == new)
    }

    fn description() -> &'static str {
        "Occupied squares are never overwritten"
    }
}

/// All state invariants of a board.
pub type BoardInvariants = (PositiveSize, SquareGrid);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    #[test]
    fn test_invariants_hold_for_new_board() {
        let board = Board::new(4).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_monotonic_after_placement() {
        let before = Board::standard();
        let mut after = before.clone();
        after.place(2, 2, Marker::O).unwrap();
        assert!(MarkersMonotonic::holds(&before, &after));
    }

    #[test]
    fn test_monotonic_detects_cleared_square() {
        let mut before = Board::standard();
        before.place(0, 0, Marker::X).unwrap();
        let after = Board::standard();
        assert!(!MarkersMonotonic::holds(&before, &after));
    }

    #[test]
    fn test_monotonic_detects_size_change() {
        let before = Board::standard();
        let after = Board::new(4).unwrap();
        assert!(!MarkersMonotonic::holds(&before, &after));
    }
}
