//! Tests for game session lifecycle.

use gato_tictactoe::{
    Board, Cell, GameSession, InvalidMoveError, InvariantSet, Outcome, Player, Position,
    SessionInvariants, choose_move,
};

#[test]
fn test_reset_restores_initial_state() {
    let mut session = GameSession::new();
    session.apply_move(0, 0, Player::X).unwrap();
    session.apply_move(1, 1, Player::O).unwrap();

    session.reset();

    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.to_move(), Player::X);
    assert!(!session.is_over());
    assert!(session.history().is_empty());
}

#[test]
fn test_reset_after_finished_game_accepts_moves() {
    let mut session = GameSession::new();
    for (row, col, player) in [
        (0, 0, Player::X),
        (1, 1, Player::O),
        (0, 1, Player::X),
        (2, 2, Player::O),
        (0, 2, Player::X),
    ] {
        session.apply_move(row, col, player).unwrap();
    }
    assert!(session.is_over());

    session.reset();
    assert_eq!(session.apply_move(0, 0, Player::X), Ok(Outcome::InProgress));
}

#[test]
fn test_win_stops_before_computer_moves() {
    let mut session = GameSession::new();
    session.apply_move(0, 0, Player::X).unwrap();
    session.apply_move(1, 1, Player::O).unwrap();
    session.apply_move(0, 1, Player::X).unwrap();
    session.apply_move(2, 2, Player::O).unwrap();

    let outcome = session.apply_move(0, 2, Player::X).unwrap();
    assert_eq!(outcome, Outcome::Win(Player::X));
    assert_eq!(session.outcome(), Outcome::Win(Player::X));
    assert!(session.is_over());
    assert_eq!(
        session.apply_move(2, 0, Player::O),
        Err(InvalidMoveError::GameOver)
    );
}

#[test]
fn test_occupied_cell_leaves_session_unchanged() {
    let mut session = GameSession::new();
    session.apply_move(1, 1, Player::X).unwrap();
    let before = session.clone();

    assert_eq!(
        session.apply_move(1, 1, Player::O),
        Err(InvalidMoveError::Occupied(Position::Center))
    );
    assert_eq!(session, before);
    assert_eq!(session.cell(1, 1), Some(Cell::X));
}

#[test]
fn test_full_game_against_search_keeps_invariants() {
    let mut session = GameSession::new();
    let mut x_moves = [
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
        Position::BottomLeft,
        Position::MiddleLeft,
    ]
    .into_iter();

    while !session.is_over() {
        let (pos, player) = match session.to_move() {
            Player::X => {
                let pos = x_moves
                    .by_ref()
                    .find(|&p| session.board().is_empty(p))
                    .or_else(|| session.board().empty_positions().next())
                    .unwrap();
                (pos, Player::X)
            }
            Player::O => (choose_move(session.board()), Player::O),
        };
        session.apply_move(pos.row(), pos.col(), player).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    assert_ne!(session.outcome(), Outcome::Win(Player::X));
}
