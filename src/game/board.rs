//! Board occupancy replayed from a move log.

use crate::game::action::Move;
use crate::game::player::Player;
use crate::game::square::Square;

/// Occupancy of the 9 squares, indexed in row-major order.
///
/// A board is never stored; it is rebuilt from a move log whenever a
/// view needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Player>; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays a move log onto an empty board.
    ///
    /// The log is expected to be legal: at most 9 moves, each on a
    /// distinct square. The session write path maintains this.
    pub fn from_moves(moves: &[Move]) -> Self {
        debug_assert!(moves.len() <= 9, "move log longer than the board");
        let mut board = Self::new();
        for mov in moves {
            debug_assert!(
                board.get(mov.square).is_none(),
                "duplicate square in move log"
            );
            board.cells[mov.square.index()] = Some(mov.player);
        }
        board
    }

    /// Returns the occupant of a square, if any.
    pub fn get(&self, square: Square) -> Option<Player> {
        self.cells[square.index()]
    }

    /// Checks whether a square is unoccupied.
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Checks if all 9 squares are occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}
