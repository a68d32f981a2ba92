//! The write path: validated moves and resets over a persisted store.

use crate::config::StorageConfig;
use crate::game::{GameView, Move, MoveError, Player, Square, Standings, derive_game, derive_stats};
use crate::state::{GameRecord, GameState};
use crate::store::{Medium, PersistedStore, SqliteMedium, StoreError};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Errors surfaced while driving a game session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The move was rejected by the game rules.
    #[display("Rejected move: {}", _0)]
    Move(MoveError),
    /// The persisted store failed.
    #[display("Store failure: {}", _0)]
    Store(StoreError),
}

/// A two-player game over a persisted state tree.
///
/// The session is the sole writer: every accepted move and every reset
/// flows through the store's updater, so the durable document always
/// reflects the latest accepted event. Reads are derived fresh from
/// the stored move log on each call.
#[derive(Debug)]
pub struct GameSession<M> {
    store: PersistedStore<GameState, M>,
}

impl GameSession<SqliteMedium> {
    /// Opens a session persisted in the configured SQLite database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or read.
    #[instrument(skip(config), fields(
        storage_key = %config.storage_key(),
        database_path = %config.database_path()
    ))]
    pub fn from_config(config: &StorageConfig) -> Result<Self, StoreError> {
        let medium = SqliteMedium::open(config.database_path()).map_err(StoreError::Medium)?;
        Self::open(medium, config.storage_key())
    }
}

impl<M: Medium> GameSession<M> {
    /// Opens a session over the given medium, loading any state
    /// persisted under `key` or starting from the empty default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the medium cannot be read.
    #[instrument(skip(medium), fields(key = %key))]
    pub fn open(medium: M, key: &str) -> Result<Self, StoreError> {
        let store = PersistedStore::open(medium, key, GameState::default())?;
        info!("Game session ready");
        Ok(Self { store })
    }

    /// Returns the persisted state tree.
    pub fn state(&self) -> &GameState {
        self.store.get()
    }

    /// Derives the view of the game in progress.
    pub fn game(&self) -> GameView {
        derive_game(self.state().current_game_moves())
    }

    /// Derives the standings over every archived game.
    pub fn stats(&self) -> Standings {
        derive_stats(self.state())
    }

    /// Plays a move for `player` on `square`.
    ///
    /// The move is validated against the derived view before anything
    /// is written: the game must be in progress, the square free, and
    /// the turn the player's.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Move`] for a rejected move and
    /// [`SessionError::Store`] if persisting the accepted move fails.
    #[instrument(skip(self))]
    pub fn play_square(&mut self, square: Square, player: Player) -> Result<GameView, SessionError> {
        let game = self.game();

        if game.status().is_complete() {
            warn!(status = ?game.status(), "Move on a finished game");
            return Err(MoveError::GameFinished.into());
        }
        if game.move_at(square).is_some() {
            warn!(%square, "Move on an occupied square");
            return Err(MoveError::SquareOccupied(square).into());
        }
        if player != *game.current_player() {
            warn!(
                expected = ?game.current_player(),
                attempted = ?player,
                "Move out of turn"
            );
            return Err(MoveError::WrongPlayer(player).into());
        }

        let action = Move::new(player, square);
        let next = self.store.update(|previous| previous.with_move(action))?;

        debug!(%action, moves = next.current_game_moves().len(), "Move accepted");
        Ok(derive_game(next.current_game_moves()))
    }

    /// Clears the board for the next game, archiving the finished one.
    ///
    /// A game is archived only when it is complete; resetting mid-game
    /// discards the live moves without recording anything. With
    /// `new_round` the active round's archive is also rolled into the
    /// all-games archive.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting the reset state fails.
    #[instrument(skip(self))]
    pub fn reset(&mut self, new_round: bool) -> Result<(), StoreError> {
        self.store.update(|previous| {
            let view = derive_game(previous.current_game_moves());

            let archived = match view.status().outcome() {
                Some(outcome) => {
                    info!(%outcome, moves = view.moves().len(), "Archiving finished game");
                    previous.with_archived_game(GameRecord::new(view.moves().clone(), outcome))
                }
                None => previous.clone(),
            };

            let cleared = archived.with_cleared_moves();
            if new_round {
                cleared.with_round_rolled()
            } else {
                cleared
            }
        })?;

        info!(new_round, "Board reset");
        Ok(())
    }

    /// Consumes the session, returning the underlying medium.
    pub fn into_medium(self) -> M {
        self.store.into_medium()
    }
}
