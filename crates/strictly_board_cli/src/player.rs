//! Player value objects.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strictly_board::Marker;

/// A participant identified by a marker.
///
/// Players live with the session that sequences turns; the board only ever
/// sees their markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on the board for this player.
    marker: Marker,
}

impl Player {
    /// Creates a player named after its marker, e.g. "Player X".
    pub fn for_marker(marker: Marker) -> Self {
        Self::new(format!("Player {marker}"), marker)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}
