//! Pure game logic: moves, board replay, win detection, and standings.
//!
//! Everything here is derived. A game is its move log; views, status,
//! and standings are recomputed from logs and archived records on
//! every read, never cached or stored.

mod action;
mod board;
mod player;
mod rules;
mod square;
mod stats;
mod view;

pub use action::{Move, MoveError};
pub use board::Board;
pub use player::{Player, PlayerProfile};
pub use rules::check_winner;
pub use square::{InvalidSquareId, Square};
pub use stats::{derive_stats, PlayerStanding, Standings};
pub use view::{derive_game, GameStatus, GameView, Outcome};
