//! Board squares, their numeric ids, and the winning lines.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A square on the 3×3 board.
///
/// Squares carry the numeric ids 1–9 in row-major order, and a move's
/// square is persisted as that id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Square {
    /// Top-left (id 1).
    TopLeft,
    /// Top-center (id 2).
    TopCenter,
    /// Top-right (id 3).
    TopRight,
    /// Middle-left (id 4).
    MiddleLeft,
    /// Center (id 5).
    Center,
    /// Middle-right (id 6).
    MiddleRight,
    /// Bottom-left (id 7).
    BottomLeft,
    /// Bottom-center (id 8).
    BottomCenter,
    /// Bottom-right (id 9).
    BottomRight,
}

impl Square {
    /// All 9 squares in id order.
    pub const ALL: [Square; 9] = [
        Square::TopLeft,
        Square::TopCenter,
        Square::TopRight,
        Square::MiddleLeft,
        Square::Center,
        Square::MiddleRight,
        Square::BottomLeft,
        Square::BottomCenter,
        Square::BottomRight,
    ];

    /// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
    pub const LINES: [[Square; 3]; 8] = [
        // Rows
        [Square::TopLeft, Square::TopCenter, Square::TopRight],
        [Square::MiddleLeft, Square::Center, Square::MiddleRight],
        [Square::BottomLeft, Square::BottomCenter, Square::BottomRight],
        // Columns
        [Square::TopLeft, Square::MiddleLeft, Square::BottomLeft],
        [Square::TopCenter, Square::Center, Square::BottomCenter],
        [Square::TopRight, Square::MiddleRight, Square::BottomRight],
        // Diagonals
        [Square::TopLeft, Square::Center, Square::BottomRight],
        [Square::TopRight, Square::Center, Square::BottomLeft],
    ];

    /// Numeric id of this square (1–9).
    pub fn id(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based row-major index (0–8).
    pub fn index(self) -> usize {
        match self {
            Square::TopLeft => 0,
            Square::TopCenter => 1,
            Square::TopRight => 2,
            Square::MiddleLeft => 3,
            Square::Center => 4,
            Square::MiddleRight => 5,
            Square::BottomLeft => 6,
            Square::BottomCenter => 7,
            Square::BottomRight => 8,
        }
    }

    /// Returns the square with the given id, `None` outside 1–9.
    pub fn from_id(id: u8) -> Option<Self> {
        <Square as strum::IntoEnumIterator>::iter().find(|square| square.id() == id)
    }

    /// Display label for this square.
    pub fn label(self) -> &'static str {
        match self {
            Square::TopLeft => "Top-left",
            Square::TopCenter => "Top-center",
            Square::TopRight => "Top-right",
            Square::MiddleLeft => "Middle-left",
            Square::Center => "Center",
            Square::MiddleRight => "Middle-right",
            Square::BottomLeft => "Bottom-left",
            Square::BottomCenter => "Bottom-center",
            Square::BottomRight => "Bottom-right",
        }
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.id()
    }
}

impl TryFrom<u8> for Square {
    type Error = InvalidSquareId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Square::from_id(id).ok_or(InvalidSquareId { id })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error for square ids outside 1–9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid square id {} (expected 1-9)", id)]
pub struct InvalidSquareId {
    /// The rejected id.
    pub id: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for square in Square::ALL {
            assert_eq!(Square::from_id(square.id()), Some(square));
        }
    }

    #[test]
    fn test_ids_out_of_range() {
        assert_eq!(Square::from_id(0), None);
        assert_eq!(Square::from_id(10), None);
    }

    #[test]
    fn test_serialized_as_numeric_id() {
        let json = serde_json::to_string(&Square::Center).expect("Serialize failed");
        assert_eq!(json, "5");
        let square: Square = serde_json::from_str("9").expect("Deserialize failed");
        assert_eq!(square, Square::BottomRight);
        assert!(serde_json::from_str::<Square>("12").is_err());
    }
}
