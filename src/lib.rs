//! Noughts library - persisted two-player tic-tac-toe core
//!
//! This library implements the state core of a two-player 3×3 game:
//! a pure derivation engine over an append-only move log, standings
//! folded from archived games, and a persisted store that keeps the
//! state tree synchronized with a durable key-value medium.
//!
//! # Architecture
//!
//! - **Game**: pure move-log derivation (turn, win and draw detection, standings)
//! - **State**: the persisted tree and its copy-on-write transitions
//! - **Store**: generic persisted container over a key-value medium
//! - **Session**: the validated write path tying the layers together
//!
//! # Example
//!
//! ```
//! use noughts::{GameSession, MemoryMedium, Player, Square};
//!
//! # fn example() -> Result<(), noughts::SessionError> {
//! let mut session = GameSession::open(MemoryMedium::new(), "demo")?;
//!
//! session.play_square(Square::Center, Player::X)?;
//! session.play_square(Square::TopLeft, Player::O)?;
//!
//! let game = session.game();
//! assert_eq!(*game.current_player(), Player::X);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod session;
mod state;
mod store;

// Crate-level exports - Storage configuration
pub use config::{ConfigError, StorageConfig};

// Crate-level exports - Game types and derivation
pub use game::{
    Board, GameStatus, GameView, InvalidSquareId, Move, MoveError, Outcome, Player,
    PlayerProfile, PlayerStanding, Square, Standings, check_winner, derive_game, derive_stats,
};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError};

// Crate-level exports - Persisted state tree
pub use state::{GameRecord, GameState, RoundHistory};

// Crate-level exports - Store and media
pub use store::{Medium, MediumError, MemoryMedium, PersistedStore, SqliteMedium, StoreError};
