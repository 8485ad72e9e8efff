//! Marker and square types.

use crate::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Single-character identifier of the player occupying a square.
///
/// The character itself is the identity; there is no separate player record
/// at this level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct Marker(char);

impl Marker {
    /// The conventional first marker.
    pub const X: Marker = Marker('X');
    /// The conventional second marker.
    pub const O: Marker = Marker('O');

    /// Creates a marker, rejecting whitespace and control characters.
    #[instrument]
    pub fn new(ch: char) -> Result<Self, BoardError> {
        if ch.is_whitespace() || ch.is_control() {
            return Err(BoardError::InvalidMarker(ch.to_string()));
        }
        Ok(Self(ch))
    }

    /// Returns the character this marker stands for.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Marker {
    type Error = BoardError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl FromStr for Marker {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(BoardError::InvalidMarker(s.to_string())),
        }
    }
}

impl TryFrom<String> for Marker {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0.to_string()
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No marker placed yet.
    #[default]
    Empty,
    /// Square holds a marker for good.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl From<Option<Marker>> for Square {
    fn from(marker: Option<Marker>) -> Self {
        marker.map_or(Square::Empty, Square::Occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_accepts_visible_char() {
        let marker = Marker::new('Z').unwrap();
        assert_eq!(marker.as_char(), 'Z');
        assert_eq!(marker.to_string(), "Z");
    }

    #[test]
    fn test_marker_rejects_whitespace() {
        assert!(matches!(Marker::new(' '), Err(BoardError::InvalidMarker(_))));
        assert!(matches!(Marker::new('\n'), Err(BoardError::InvalidMarker(_))));
    }

    #[test]
    fn test_marker_parse_requires_single_char() {
        assert_eq!("X".parse::<Marker>().unwrap(), Marker::X);
        assert!("".parse::<Marker>().is_err());
        assert!("XO".parse::<Marker>().is_err());
    }

    #[test]
    fn test_marker_serializes_as_string() {
        let json = serde_json::to_string(&Marker::O).unwrap();
        assert_eq!(json, "\"O\"");
        assert!(serde_json::from_str::<Marker>("\"OO\"").is_err());
    }

    #[test]
    fn test_square_marker() {
        assert_eq!(Square::Empty.marker(), None);
        assert_eq!(Square::Occupied(Marker::X).marker(), Some(Marker::X));
        assert!(Square::default().is_empty());
    }
}
