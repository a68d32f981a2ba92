//! Player identities and the fixed display profile table.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (first mover).
    X,
    /// Player O (second mover).
    O,
}

impl Player {
    /// The player table in turn order: X moves first, O second.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Index of this player in the turn-order table.
    pub fn table_index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Returns the fixed display profile for this player.
    ///
    /// Profiles are built-in and re-derived on every call; they are never
    /// serialized into the persisted state.
    pub fn profile(self) -> &'static PlayerProfile {
        &PROFILES[self.table_index()]
    }
}

/// Display metadata for a player.
///
/// The UI maps `color` to a palette entry and `icon` to a glyph; the core
/// treats both as opaque identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerProfile {
    /// Display name.
    pub name: &'static str,
    /// Color identifier.
    pub color: &'static str,
    /// Icon identifier.
    pub icon: &'static str,
}

const PROFILES: [PlayerProfile; 2] = [
    PlayerProfile {
        name: "Player 1",
        color: "turquoise",
        icon: "fa-x",
    },
    PlayerProfile {
        name: "Player 2",
        color: "yellow",
        icon: "fa-o",
    },
];
