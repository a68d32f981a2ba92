//! Win and tie standings folded from archived games.

use crate::game::player::Player;
use crate::state::GameState;
use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// Win count for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct PlayerStanding {
    /// The player these wins belong to.
    player: Player,
    /// Number of archived games this player won.
    wins: u32,
}

/// Standings across every archived game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Standings {
    /// Per-player standings in player table order.
    players: [PlayerStanding; 2],
    /// Number of archived games with no winner.
    ties: u32,
}

impl Standings {
    /// Returns the standing for the given player.
    pub fn for_player(&self, player: Player) -> &PlayerStanding {
        &self.players[player.table_index()]
    }
}

/// Folds every archived game into per-player wins and a tie count.
///
/// Current-round games and prior-round games count alike. Archived
/// records always carry a terminal outcome, so each one lands on
/// exactly one counter.
#[instrument(skip(state), fields(
    round_games = state.history().current_round_games().len(),
    all_games = state.history().all_games().len()
))]
pub fn derive_stats(state: &GameState) -> Standings {
    let mut wins = [0u32; 2];
    let mut ties = 0u32;

    let records = state
        .history()
        .current_round_games()
        .iter()
        .chain(state.history().all_games());

    for record in records {
        match record.outcome().winner() {
            Some(player) => wins[player.table_index()] += 1,
            None => ties += 1,
        }
    }

    Standings {
        players: Player::ALL.map(|player| PlayerStanding::new(player, wins[player.table_index()])),
        ties,
    }
}
