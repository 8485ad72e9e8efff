//! Tests for board state, coordinate validation, and terminal states.

use strictly_board::{Board, BoardError, BoardStatus, Line, Marker};

fn marker(ch: char) -> Marker {
    Marker::new(ch).unwrap()
}

#[test]
fn test_reset_empties_every_square() {
    let mut board = Board::standard();
    board.place(0, 0, Marker::X).unwrap();
    board.place(2, 1, Marker::O).unwrap();
    board.reset();

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(board.is_empty(row, col), Ok(true));
            assert_eq!(board.get(row, col), Ok(None));
        }
    }
}

#[test]
fn test_size_is_fixed() {
    let mut board = Board::new(5).unwrap();
    assert_eq!(board.size(), 5);
    board.reset();
    assert_eq!(board.size(), 5);
}

#[test]
fn test_out_of_bounds_coordinates_rejected() {
    let mut board = Board::standard();
    let invalid = [(-1, 0), (0, -1), (3, 0), (0, 3), (-5, 7), (isize::MIN, isize::MAX)];

    for (row, col) in invalid {
        let expected = BoardError::OutOfBounds { row, col, size: 3 };
        assert_eq!(board.is_empty(row, col), Err(expected.clone()));
        assert_eq!(board.get(row, col), Err(expected.clone()));
        assert_eq!(board.place(row, col, Marker::X), Err(expected));
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_place_marks_square() {
    let mut board = Board::standard();
    board.place(1, 2, Marker::O).unwrap();

    assert_eq!(board.is_empty(1, 2), Ok(false));
    assert_eq!(board.get(1, 2), Ok(Some(Marker::O)));
}

#[test]
fn test_place_on_occupied_square_is_noop() {
    let mut board = Board::standard();
    board.place(0, 0, Marker::X).unwrap();

    assert_eq!(board.place(0, 0, Marker::O), Ok(()));
    assert_eq!(board.get(0, 0), Ok(Some(Marker::X)));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_top_row_wins() {
    let mut board = Board::standard();
    board.place(0, 0, Marker::X).unwrap();
    board.place(0, 1, Marker::X).unwrap();
    board.place(0, 2, Marker::X).unwrap();

    assert_eq!(board.is_won(), Some(Marker::X));
    assert_eq!(board.winning_line(), Some((Line::Row(0), Marker::X)));
    assert_eq!(board.status(), BoardStatus::Won(Marker::X));
}

#[test]
fn test_fresh_board_not_tied() {
    let board = Board::standard();
    assert!(!board.is_tied());
    assert_eq!(board.is_won(), None);
    assert_eq!(board.status(), BoardStatus::InProgress);
}

#[test]
fn test_full_board_without_line_is_tied() {
    // X O X
    // X O O
    // O X X
    let layout = [['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']];
    let mut board = Board::standard();
    for (r, row) in layout.iter().enumerate() {
        for (c, ch) in row.iter().enumerate() {
            board.place(r as isize, c as isize, marker(*ch)).unwrap();
        }
    }

    assert!(board.is_full());
    assert_eq!(board.is_won(), None);
    assert!(board.is_tied());
    assert_eq!(board.status(), BoardStatus::Tied);
}

#[test]
fn test_diagonal_wins_on_partial_board() {
    let mut board = Board::standard();
    board.place(0, 0, Marker::O).unwrap();
    board.place(1, 1, Marker::O).unwrap();
    board.place(2, 2, Marker::O).unwrap();

    assert!(!board.is_full());
    assert_eq!(board.is_won(), Some(Marker::O));
    assert!(!board.is_tied());
}

#[test]
fn test_placement_allowed_after_win() {
    let mut board = Board::standard();
    for col in 0..3 {
        board.place(0, col, Marker::X).unwrap();
    }
    board.place(2, 2, Marker::O).unwrap();

    assert_eq!(board.get(2, 2), Ok(Some(Marker::O)));
    assert_eq!(board.is_won(), Some(Marker::X));
}

#[test]
fn test_boards_are_independent() {
    let mut first = Board::standard();
    let second = Board::standard();
    first.place(1, 1, Marker::X).unwrap();

    assert_eq!(second.is_empty(1, 1), Ok(true));
}

#[test]
fn test_custom_markers() {
    let mut board = Board::new(2).unwrap();
    let star = marker('*');
    board.place(0, 1, star).unwrap();
    board.place(1, 0, star).unwrap();

    assert_eq!(board.winning_line(), Some((Line::AntiDiagonal, star)));
}

#[test]
fn test_single_square_board() {
    let mut board = Board::new(1).unwrap();
    assert!(!board.is_tied());
    board.place(0, 0, Marker::O).unwrap();
    assert_eq!(board.is_won(), Some(Marker::O));
    assert!(!board.is_tied());
}
