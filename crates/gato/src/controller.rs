//! Turn control between human input and the computer opponent.

use crate::players::{ComputerPlayer, Opponent};
use crate::settings::GameMode;
use gato_tictactoe::{GameSession, InvalidMoveError, Move, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// The mark played by the human in single-player games.
pub const HUMAN: Player = Player::X;

/// The mark played by the computer in single-player games.
pub const COMPUTER: Player = Player::O;

/// What one accepted input led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// The move made from input.
    pub played: Move,
    /// The computer's answer, if it moved.
    pub reply: Option<Move>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// Owns the session and decides when the computer moves.
///
/// In [`GameMode::VsComputer`] every human move that leaves the game in
/// progress is answered at once, so the session is always waiting for X
/// when control returns to the input adapter.
pub struct Controller {
    session: GameSession,
    mode: GameMode,
    opponent: Box<dyn Opponent>,
}

impl Controller {
    /// Creates a controller with the minimax computer as opponent.
    pub fn new(mode: GameMode) -> Self {
        Self::with_opponent(mode, Box::new(ComputerPlayer::default()))
    }

    /// Creates a controller with a custom opponent.
    pub fn with_opponent(mode: GameMode, opponent: Box<dyn Opponent>) -> Self {
        Self {
            session: GameSession::new(),
            mode,
            opponent,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the opponent's display name.
    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// True while a move from input would be accepted by turn order.
    pub fn accepts_input(&self) -> bool {
        if self.session.is_over() {
            return false;
        }
        match self.mode {
            GameMode::VsComputer => self.session.to_move() == HUMAN,
            GameMode::TwoPlayer => true,
        }
    }

    /// Plays `position` for the player to move, then lets the computer answer.
    ///
    /// The computer is only asked for a move while the outcome is in progress.
    ///
    /// # Errors
    ///
    /// Returns the session's rejection of either move. The session is left
    /// as it was before the call in that case, even when only the
    /// opponent's reply was illegal.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn play(&mut self, position: Position) -> Result<TurnReport, InvalidMoveError> {
        let player = self.session.to_move();
        if !self.session.is_over() && self.mode == GameMode::VsComputer && player != HUMAN {
            return Err(InvalidMoveError::WrongPlayer(player));
        }

        let before = self.session.clone();
        let mut outcome = self
            .session
            .apply_move(position.row(), position.col(), player)?;
        let played = Move::new(player, position);
        debug!(%played, %outcome, "Move applied");

        let mut reply = None;
        if self.mode == GameMode::VsComputer && !outcome.is_terminal() {
            let position = self.opponent.choose(&self.session);
            outcome = match self
                .session
                .apply_move(position.row(), position.col(), COMPUTER)
            {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(
                        %position,
                        error = %e,
                        opponent = %self.opponent.name(),
                        "Opponent reply rejected"
                    );
                    self.session = before;
                    return Err(e);
                }
            };
            info!(%position, %outcome, opponent = %self.opponent.name(), "Computer replied");
            reply = Some(Move::new(COMPUTER, position));
        }

        Ok(TurnReport {
            played,
            reply,
            outcome,
        })
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Starting new game");
        self.session.reset();
    }

    /// Switches mode; the current game is discarded.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(from = %self.mode, to = %mode, "Changing game mode");
        self.mode = mode;
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Plays a fixed list of moves; panics if asked for more.
    struct Scripted {
        moves: VecDeque<Position>,
    }

    impl Opponent for Scripted {
        fn choose(&mut self, _session: &GameSession) -> Position {
            self.moves.pop_front().expect("opponent asked to move after script ended")
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn scripted(moves: &[Position]) -> Box<dyn Opponent> {
        Box::new(Scripted {
            moves: moves.iter().copied().collect(),
        })
    }

    #[test]
    fn test_computer_answers_corner_with_center() {
        let mut controller = Controller::new(GameMode::VsComputer);
        let report = controller.play(Position::TopLeft).unwrap();
        assert_eq!(report.reply, Some(Move::new(COMPUTER, Position::Center)));
        assert_eq!(report.outcome, Outcome::InProgress);
        assert_eq!(controller.session().to_move(), HUMAN);
        assert!(controller.accepts_input());
    }

    #[test]
    fn test_no_reply_after_winning_move() {
        let mut controller = Controller::with_opponent(
            GameMode::VsComputer,
            scripted(&[Position::Center, Position::BottomRight]),
        );
        controller.play(Position::TopLeft).unwrap();
        controller.play(Position::TopCenter).unwrap();

        let report = controller.play(Position::TopRight).unwrap();
        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert_eq!(report.reply, None);
        assert!(!controller.accepts_input());
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut controller = Controller::new(GameMode::VsComputer);
        controller.play(Position::TopLeft).unwrap();
        let before = controller.session().clone();

        let result = controller.play(Position::Center);
        assert_eq!(result, Err(InvalidMoveError::Occupied(Position::Center)));
        assert_eq!(controller.session(), &before);
    }

    #[test]
    fn test_illegal_reply_rolls_back_human_move() {
        let mut controller = Controller::with_opponent(
            GameMode::VsComputer,
            scripted(&[Position::TopLeft, Position::Center]),
        );
        let before = controller.session().clone();

        let result = controller.play(Position::TopLeft);
        assert_eq!(result, Err(InvalidMoveError::Occupied(Position::TopLeft)));
        assert_eq!(controller.session(), &before);
        assert!(controller.accepts_input());

        let report = controller.play(Position::TopLeft).unwrap();
        assert_eq!(report.reply, Some(Move::new(COMPUTER, Position::Center)));
    }

    #[test]
    fn test_two_player_mode_has_no_reply() {
        let mut controller = Controller::new(GameMode::TwoPlayer);
        let first = controller.play(Position::Center).unwrap();
        assert_eq!(first.reply, None);
        assert_eq!(controller.session().to_move(), Player::O);

        let second = controller.play(Position::TopLeft).unwrap();
        assert_eq!(second.played, Move::new(Player::O, Position::TopLeft));
    }

    #[test]
    fn test_computer_never_loses_to_greedy_human() {
        let mut controller = Controller::new(GameMode::VsComputer);
        while controller.accepts_input() {
            let pos = controller.session().board().empty_positions().next().unwrap();
            controller.play(pos).unwrap();
        }
        assert_ne!(controller.session().outcome(), Outcome::Win(HUMAN));
    }

    #[test]
    fn test_set_mode_resets() {
        let mut controller = Controller::new(GameMode::VsComputer);
        controller.play(Position::Center).unwrap();
        controller.set_mode(GameMode::TwoPlayer);
        assert_eq!(controller.mode(), GameMode::TwoPlayer);
        assert!(controller.session().history().is_empty());
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut controller = Controller::new(GameMode::TwoPlayer);
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            controller.play(pos).unwrap();
        }
        assert!(controller.session().is_over());
        assert_eq!(
            controller.play(Position::BottomLeft),
            Err(InvalidMoveError::GameOver)
        );

        controller.new_game();
        assert!(controller.accepts_input());
    }
}
