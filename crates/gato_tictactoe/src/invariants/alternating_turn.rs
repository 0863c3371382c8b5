//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: players alternate turns, X first.
///
/// While the game is running, the player to move follows from the number of
/// moves played. A finished game keeps the last mover as `to_move`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = match (session.is_over(), history.last()) {
            (true, Some(last)) => last.player,
            _ if history.len() % 2 == 0 => Player::X,
            _ => Player::O,
        };

        session.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_finished_game_holds() {
        let mut session = GameSession::new();
        for (row, col, player) in [
            (0, 0, Player::X),
            (1, 0, Player::O),
            (0, 1, Player::X),
            (1, 1, Player::O),
            (0, 2, Player::X),
        ] {
            session.apply_move(row, col, player).unwrap();
        }
        assert!(session.is_over());
        assert_eq!(session.to_move(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = GameSession::new();
        session.history.push(Move::new(Player::X, Position::TopLeft));
        session.history.push(Move::new(Player::X, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_o_first_violates() {
        let mut session = GameSession::new();
        session.history.push(Move::new(Player::O, Position::TopLeft));
        session.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
