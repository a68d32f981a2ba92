//! Tests for the session write path: validated moves, resets, standings.

use noughts::{
    GameSession, GameStatus, Medium, MemoryMedium, MoveError, Outcome, Player, SessionError,
    SqliteMedium, StorageConfig, Square,
};

fn square(id: u8) -> Square {
    Square::from_id(id).expect("Invalid square id")
}

fn memory_session() -> GameSession<MemoryMedium> {
    GameSession::open(MemoryMedium::new(), "game-state-key").expect("Open failed")
}

fn play_script<M: Medium>(session: &mut GameSession<M>, script: &[(Player, u8)]) {
    for (player, id) in script {
        session
            .play_square(square(*id), *player)
            .expect("Scripted move rejected");
    }
}

// X takes the top row.
const X_WINS: &[(Player, u8)] = &[
    (Player::X, 1),
    (Player::O, 4),
    (Player::X, 2),
    (Player::O, 5),
    (Player::X, 3),
];

// O takes the top row while X scatters.
const O_WINS: &[(Player, u8)] = &[
    (Player::X, 4),
    (Player::O, 1),
    (Player::X, 5),
    (Player::O, 2),
    (Player::X, 9),
    (Player::O, 3),
];

// Full board, no line.
const DRAWN: &[(Player, u8)] = &[
    (Player::X, 1),
    (Player::O, 2),
    (Player::X, 3),
    (Player::O, 4),
    (Player::X, 5),
    (Player::O, 7),
    (Player::X, 6),
    (Player::O, 9),
    (Player::X, 8),
];

#[test]
fn test_moves_append_and_alternate() {
    let mut session = memory_session();

    let game = session
        .play_square(Square::Center, Player::X)
        .expect("First move rejected");
    assert_eq!(game.moves().len(), 1);
    assert_eq!(*game.current_player(), Player::O);

    let game = session
        .play_square(Square::TopLeft, Player::O)
        .expect("Second move rejected");
    assert_eq!(game.moves().len(), 2);
    assert_eq!(*game.current_player(), Player::X);
}

#[test]
fn test_occupied_square_rejected() {
    let mut session = memory_session();
    session
        .play_square(Square::Center, Player::X)
        .expect("First move rejected");

    let result = session.play_square(Square::Center, Player::O);
    assert!(matches!(
        result,
        Err(SessionError::Move(MoveError::SquareOccupied(Square::Center)))
    ));
    assert_eq!(session.game().moves().len(), 1);
}

#[test]
fn test_out_of_turn_rejected() {
    let mut session = memory_session();

    let result = session.play_square(Square::Center, Player::O);
    assert!(matches!(
        result,
        Err(SessionError::Move(MoveError::WrongPlayer(Player::O)))
    ));
    assert!(session.game().moves().is_empty());
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut session = memory_session();
    play_script(&mut session, X_WINS);
    assert_eq!(*session.game().status(), GameStatus::Won(Player::X));

    let result = session.play_square(Square::BottomRight, Player::O);
    assert!(matches!(
        result,
        Err(SessionError::Move(MoveError::GameFinished))
    ));
}

#[test]
fn test_reset_archives_finished_game() {
    let mut session = memory_session();
    play_script(&mut session, X_WINS);

    session.reset(false).expect("Reset failed");

    let state = session.state();
    assert!(state.current_game_moves().is_empty());
    assert_eq!(state.history().current_round_games().len(), 1);
    assert!(state.history().all_games().is_empty());

    let record = &state.history().current_round_games()[0];
    assert_eq!(*record.outcome(), Outcome::Winner(Player::X));
    assert_eq!(record.moves().len(), 5);

    assert_eq!(*session.game().status(), GameStatus::InProgress);
}

#[test]
fn test_reset_mid_game_archives_nothing() {
    let mut session = memory_session();
    session
        .play_square(Square::Center, Player::X)
        .expect("Move rejected");
    session
        .play_square(Square::TopLeft, Player::O)
        .expect("Move rejected");

    session.reset(false).expect("Reset failed");

    let state = session.state();
    assert!(state.current_game_moves().is_empty());
    assert!(state.history().current_round_games().is_empty());
    assert!(state.history().all_games().is_empty());
}

#[test]
fn test_new_round_rolls_archive() {
    let mut session = memory_session();

    play_script(&mut session, X_WINS);
    session.reset(false).expect("First reset failed");

    play_script(&mut session, O_WINS);
    session.reset(true).expect("New round reset failed");

    let state = session.state();
    assert!(state.history().current_round_games().is_empty());
    assert_eq!(state.history().all_games().len(), 2);
}

#[test]
fn test_stats_span_rounds() {
    let mut session = memory_session();

    play_script(&mut session, X_WINS);
    session.reset(false).expect("Reset failed");
    play_script(&mut session, O_WINS);
    session.reset(true).expect("Reset failed");
    play_script(&mut session, DRAWN);
    session.reset(false).expect("Reset failed");

    let standings = session.stats();
    assert_eq!(*standings.for_player(Player::X).wins(), 1);
    assert_eq!(*standings.for_player(Player::O).wins(), 1);
    assert_eq!(*standings.ties(), 1);
}

#[test]
fn test_state_survives_reopen() {
    let mut session = memory_session();
    play_script(&mut session, X_WINS);
    session.reset(false).expect("Reset failed");
    session
        .play_square(Square::Center, Player::X)
        .expect("Move rejected");

    let medium = session.into_medium();
    let reopened = GameSession::open(medium, "game-state-key").expect("Reopen failed");

    assert_eq!(reopened.game().moves().len(), 1);
    assert_eq!(reopened.state().history().current_round_games().len(), 1);
}

#[test]
fn test_sqlite_state_survives_fresh_connection() {
    let db_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    {
        let medium = SqliteMedium::open(&db_path).expect("Failed to open medium");
        let mut session = GameSession::open(medium, "game-state-key").expect("Open failed");
        play_script(&mut session, O_WINS);
        session.reset(false).expect("Reset failed");
    }

    let medium = SqliteMedium::open(&db_path).expect("Failed to reopen medium");
    let session = GameSession::open(medium, "game-state-key").expect("Reopen failed");

    let standings = session.stats();
    assert_eq!(*standings.for_player(Player::O).wins(), 1);
    assert!(session.game().moves().is_empty());
}

#[test]
fn test_from_config() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir
        .path()
        .join("noughts.db")
        .to_str()
        .expect("Invalid path")
        .to_string();
    let config = StorageConfig::new("game-state-key", db_path);

    {
        let mut session = GameSession::from_config(&config).expect("Open failed");
        session
            .play_square(Square::BottomLeft, Player::X)
            .expect("Move rejected");
    }

    let session = GameSession::from_config(&config).expect("Reopen failed");
    assert_eq!(session.game().moves().len(), 1);
}
