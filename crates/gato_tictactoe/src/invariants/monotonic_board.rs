//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Replay fails on any overwrite, so consecutive states differ in exactly
/// one cell that went from empty to marked.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Board::new();

        for mov in session.history() {
            let pos = mov.position;
            if replayed.apply_move(pos.row(), pos.col(), mov.player).is_err() {
                return false;
            }
        }

        replayed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Move, Player, Position};

    #[test]
    fn test_empty_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut session = GameSession::new();
        session.apply_move(0, 0, Player::X).unwrap();
        session.apply_move(1, 1, Player::O).unwrap();
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut session = GameSession::new();
        session.apply_move(1, 1, Player::X).unwrap();
        session.board.set(Position::Center, Cell::O);
        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_repeated_position_violates() {
        let mut session = GameSession::new();
        session.apply_move(1, 1, Player::X).unwrap();
        session.history.push(Move::new(Player::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
