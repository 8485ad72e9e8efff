//! Tests for playing sessions configured from TOML.

use std::io::Write;
use strictly_board::{BoardStatus, Line, Marker};
use strictly_board_cli::{AppConfig, GameSession, SessionError, TurnOutcome, run_interactive};

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_custom_players_take_turns() {
    let file = config_file(
        r#"
        size = 4

        [[players]]
        name = "Ada"
        marker = "A"

        [[players]]
        name = "Bo"
        marker = "B"
        "#,
    );
    let config = AppConfig::from_file(file.path()).unwrap();
    let mut session = GameSession::from_config(&config).unwrap();
    assert_eq!(session.board().size(), 4);

    for col in 0..3 {
        session.play(0, col).unwrap();
        session.play(1, col).unwrap();
    }
    let outcome = session.play(0, 3).unwrap();

    match outcome {
        TurnOutcome::Won { winner, line } => {
            assert_eq!(winner.name(), "Ada");
            assert_eq!(line, Line::Row(0));
        }
        other => panic!("Expected a win, got {other:?}"),
    }
    assert_eq!(session.status(), BoardStatus::Won(Marker::new('A').unwrap()));
}

#[test]
fn test_three_player_rotation() {
    let file = config_file(
        r#"
        [[players]]
        name = "One"
        marker = "1"

        [[players]]
        name = "Two"
        marker = "2"

        [[players]]
        name = "Three"
        marker = "3"
        "#,
    );
    let config = AppConfig::from_file(file.path()).unwrap();
    let mut session = GameSession::from_config(&config).unwrap();

    session.play(0, 0).unwrap();
    session.play(0, 1).unwrap();
    session.play(0, 2).unwrap();

    assert_eq!(session.current_player().name(), "One");
    assert_eq!(session.board().get(0, 2), Ok(Some(Marker::new('3').unwrap())));
}

#[test]
fn test_no_moves_after_game_over() {
    let mut session = GameSession::from_config(&AppConfig::default()).unwrap();
    for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        session.play(row, col).unwrap();
    }
    assert!(matches!(session.play(1, 0), Err(SessionError::GameOver(_))));
    assert_eq!(session.board().is_empty(1, 0), Ok(true));
}

#[test]
fn test_interactive_reset_starts_over() {
    let mut session = GameSession::from_config(&AppConfig::default()).unwrap();
    let mut output = Vec::new();
    run_interactive(&mut session, "1 1\nreset\n".as_bytes(), &mut output).unwrap();

    assert_eq!(session.board().occupied_count(), 0);
    assert_eq!(*session.current_player().marker(), Marker::X);
}
