//! Interactive play and one-shot evaluation.

use crate::input::{self, Command};
use crate::session::{GameSession, TurnOutcome};
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_board::{Board, BoardStatus, Line, Marker};
use tracing::{debug, instrument, warn};

/// Runs a game over line-oriented input until it ends or input runs out.
///
/// Errors from moves are reported to `output` and the same player is asked
/// again. After a win or tie the player may `reset` or `quit`.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(output, "{}\n", session.board())?;
    prompt(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = match input::parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Rejected input");
                writeln!(output, "{e}")?;
                prompt(session, &mut output)?;
                continue;
            }
        };
        debug!(?command, "Parsed command");

        match command {
            Command::Quit => {
                writeln!(output, "Bye.")?;
                return Ok(());
            }
            Command::Reset => {
                session.reset();
                writeln!(output, "{}\n", session.board())?;
            }
            Command::Place { row, col } => match session.play(row, col) {
                Ok(outcome) => {
                    writeln!(output, "{}\n", session.board())?;
                    match outcome {
                        TurnOutcome::Continue { .. } => {}
                        TurnOutcome::Won { winner, line } => {
                            writeln!(output, "{winner} wins on the {line}!")?;
                        }
                        TurnOutcome::Tied => writeln!(output, "It's a tie.")?,
                    }
                }
                Err(e) => writeln!(output, "{e}")?,
            },
        }
        prompt(session, &mut output)?;
    }

    Ok(())
}

fn prompt<W: Write>(session: &GameSession, output: &mut W) -> std::io::Result<()> {
    if session.status().is_terminal() {
        write!(output, "Game over. Type \"reset\" or \"quit\": ")?;
    } else {
        write!(output, "{} to move (row col): ", session.current_player())?;
    }
    output.flush()
}

/// Status report for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// The evaluated board.
    pub board: Board,
    /// Overall status.
    pub status: BoardStatus,
    /// Line deciding the win, if any.
    pub winning_line: Option<Line>,
    /// Whether every square is filled.
    pub full: bool,
}

impl Evaluation {
    /// Evaluates a board.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn of(board: Board) -> Self {
        let status = board.status();
        let winning_line = board.winning_line().map(|(line, _)| line);
        let full = board.is_full();
        Self {
            board,
            status,
            winning_line,
            full,
        }
    }

    /// Winner, if any.
    pub fn winner(&self) -> Option<Marker> {
        match self.status {
            BoardStatus::Won(marker) => Some(marker),
            _ => None,
        }
    }

    /// Renders a human-readable report.
    pub fn render(&self) -> String {
        let mut report = format!("{}\n\n", self.board);
        match (self.status, self.winning_line) {
            (BoardStatus::Won(marker), Some(line)) => {
                report.push_str(&format!("Won by {marker} on the {line}"));
            }
            (status, _) => report.push_str(&format!("Status: {status}")),
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppConfig;

    fn run(script: &str) -> String {
        let mut session = GameSession::from_config(&AppConfig::default()).unwrap();
        let mut output = Vec::new();
        run_interactive(&mut session, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_interactive_win() {
        let transcript = run("0 0\n1 0\n0 1\n1 1\n0 2\n");
        assert!(transcript.contains("Player X (X) wins on the row 0!"));
        assert!(transcript.ends_with("Game over. Type \"reset\" or \"quit\": "));
    }

    #[test]
    fn test_interactive_reports_errors() {
        let transcript = run("5 5\n0 0\n0 0\nnonsense\nquit\n");
        assert!(transcript.contains("outside the 3x3 board"));
        assert!(transcript.contains("already occupied by X"));
        assert!(transcript.contains("Expected \"row col\""));
        assert!(transcript.ends_with("Bye.\n"));
    }

    #[test]
    fn test_interactive_tie() {
        let transcript = run("0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n");
        assert!(transcript.contains("It's a tie."));
    }

    #[test]
    fn test_evaluation_render() {
        let board = input::parse_board("OX./.OX/..O").unwrap();
        let evaluation = Evaluation::of(board);
        assert_eq!(evaluation.winner(), Some(Marker::O));
        assert_eq!(evaluation.winning_line, Some(Line::Diagonal));
        assert!(!evaluation.full);
        assert!(evaluation.render().ends_with("Won by O on the diagonal"));
    }

    #[test]
    fn test_evaluation_json() {
        let board = input::parse_board("XOX/XOO/OXX").unwrap();
        let json = serde_json::to_value(Evaluation::of(board)).unwrap();
        assert_eq!(json["status"], serde_json::json!({ "state": "tied" }));
        assert_eq!(json["winning_line"], serde_json::Value::Null);
        assert_eq!(json["full"], serde_json::json!(true));
        assert_eq!(json["board"]["size"], serde_json::json!(3));
    }
}
