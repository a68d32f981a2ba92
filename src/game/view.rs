//! Derived game views: the read model replayed from a move log.

use crate::game::action::Move;
use crate::game::board::Board;
use crate::game::player::Player;
use crate::game::rules::check_winner;
use crate::game::square::Square;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// The player completed a line.
    Won(Player),
    /// The board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Checks whether the game has ended.
    pub fn is_complete(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner, `None` for in-progress games and draws.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Converts a terminal status into an archivable outcome.
    ///
    /// Returns `None` while the game is in progress, so incomplete
    /// games can never be archived.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

/// Terminal result of an archived game.
///
/// Unlike [`GameStatus`] there is no in-progress variant, so a stored
/// record always carries a settled result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player completed a line.
    Winner(Player),
    /// The board filled with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner, `None` for draws.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Checks whether the game was drawn.
    pub fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{:?} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Snapshot of a game derived from its move log.
///
/// Views are recomputed on every read and never stored. Two equal
/// move logs always derive equal views.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameView {
    /// The replayed move log.
    moves: Vec<Move>,
    /// The player whose turn it is, even after the game ends.
    current_player: Player,
    /// Win, draw, or in-progress status.
    status: GameStatus,
}

impl GameView {
    /// Returns the move on a square, if one has been made.
    pub fn move_at(&self, square: Square) -> Option<&Move> {
        self.moves.iter().find(|mov| mov.square == square)
    }
}

/// Derives the full game view from a move log.
///
/// Pure and deterministic: the turn comes from the log length, the
/// board from replay, and the status from the winning lines. Logs are
/// expected to be legal (at most 9 moves, distinct squares); the
/// session write path maintains that invariant.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn derive_game(moves: &[Move]) -> GameView {
    let board = Board::from_moves(moves);
    let current_player = Player::ALL[moves.len() % Player::ALL.len()];

    let status = if let Some(winner) = check_winner(&board) {
        GameStatus::Won(winner)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };

    GameView {
        moves: moves.to_vec(),
        current_player,
        status,
    }
}
