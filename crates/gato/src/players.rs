//! Computer players.

use gato_tictactoe::{GameSession, Position, choose_move};
use tracing::debug;

/// A player that decides its own moves.
pub trait Opponent {
    /// Picks a move for the player to move in `session`.
    ///
    /// Only called while the game is in progress.
    fn choose(&mut self, session: &GameSession) -> Position;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Unbeatable opponent backed by exhaustive minimax. Plays O.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new("Computer")
    }
}

impl Opponent for ComputerPlayer {
    fn choose(&mut self, session: &GameSession) -> Position {
        let position = choose_move(session.board());
        debug!(player = %self.name, %position, "Computer chose position");
        position
    }

    fn name(&self) -> &str {
        &self.name
    }
}
