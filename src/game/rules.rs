//! Win detection over the 8 board lines.

use crate::game::board::Board;
use crate::game::player::Player;
use crate::game::square::Square;
use tracing::instrument;

/// Checks the board for a winner.
///
/// Players are scanned in table order, and each player's squares are
/// tested against every winning line. A legal move log can produce at
/// most one winner, so the scan order does not change the result.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for player in Player::ALL {
        for line in &Square::LINES {
            if line.iter().all(|square| board.get(*square) == Some(player)) {
                return Some(player);
            }
        }
    }

    None
}
