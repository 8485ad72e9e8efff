//! Win detection.

use crate::{Board, Line, Marker, Square};
use tracing::{debug, instrument};

/// Returns the marker filling `line`, or `None` if any square on it is
/// empty or the markers differ.
pub fn line_owner(board: &Board, line: Line) -> Option<Marker> {
    let mut markers = line
        .positions(board.size())
        .map(|pos| board.square(pos).and_then(Square::marker));
    let first = markers.next()??;
    markers.all(|marker| marker == Some(first)).then_some(first)
}

/// Finds the first fully matched line in scan order, with its marker.
///
/// Simultaneous winning lines are not ranked beyond scan order.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winning_line(board: &Board) -> Option<(Line, Marker)> {
    let found = Line::all(board.size())
        .find_map(|line| line_owner(board, line).map(|marker| (line, marker)));
    if let Some((line, marker)) = found {
        debug!(%line, %marker, "Winning line found");
    }
    found
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Marker> {
    find_winning_line(board).map(|(_, marker)| marker)
}
