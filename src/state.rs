//! The persisted state tree and its copy-on-write transitions.

use crate::game::{Move, Outcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An archived game: its full move log and how it ended.
///
/// Records are immutable once created and only ever carry terminal
/// outcomes; an unfinished game is never archived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    /// The complete move log of the archived game.
    moves: Vec<Move>,
    /// How the game ended.
    outcome: Outcome,
}

/// Archived games split into the active round and everything before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundHistory {
    /// Games finished during the active round.
    current_round_games: Vec<GameRecord>,
    /// Games from every prior round, absorbed in bulk at round end.
    all_games: Vec<GameRecord>,
}

/// The single persisted root: the live move log plus round history.
///
/// State is never mutated in place. Every transition clones the tree
/// and returns a replacement, so snapshots handed out earlier stay
/// valid. All transitions run inside the store's updater.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    /// Move log of the game in progress.
    current_game_moves: Vec<Move>,
    /// Archived games.
    history: RoundHistory,
}

impl GameState {
    /// Returns a new state with the move appended to the live log.
    #[must_use]
    pub fn with_move(&self, mov: Move) -> Self {
        let mut next = self.clone();
        next.current_game_moves.push(mov);
        next
    }

    /// Returns a new state with the record appended to the active round.
    #[must_use]
    pub fn with_archived_game(&self, record: GameRecord) -> Self {
        let mut next = self.clone();
        next.history.current_round_games.push(record);
        next
    }

    /// Returns a new state with an empty live move log.
    #[must_use]
    pub fn with_cleared_moves(&self) -> Self {
        let mut next = self.clone();
        next.current_game_moves.clear();
        next
    }

    /// Returns a new state with the active round rolled into the
    /// all-games archive, leaving the round empty.
    #[must_use]
    pub fn with_round_rolled(&self) -> Self {
        let mut next = self.clone();
        let round = std::mem::take(&mut next.history.current_round_games);
        next.history.all_games.extend(round);
        next
    }
}
