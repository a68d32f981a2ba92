//! Moves and the errors that reject them.

use crate::game::player::Player;
use crate::game::square::Square;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single move: one player claiming one square.
///
/// Moves are domain events, not side effects. A move log is the full
/// record of a game, and every view is derived from it by replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The square being claimed.
    pub square: Square,
}

impl Move {
    /// Creates a move for the given player and square.
    #[instrument]
    pub fn new(player: Player, square: Square) -> Self {
        Self { player, square }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.player, self.square)
    }
}

/// Reasons a move can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square already holds a move.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Square),
    /// The player moved out of turn.
    #[display("It is not {:?}'s turn", _0)]
    WrongPlayer(Player),
    /// The game already has a winner or a full board.
    #[display("The game is already finished")]
    GameFinished,
}

impl std::error::Error for MoveError {}
