//! Owned state of a single game.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{Board, Cell, InvalidMoveError, Outcome, Player, Position, evaluate_outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// One game: board, player to move, terminal flag and history.
///
/// X always moves first. Once the game is won or drawn every further move
/// is rejected until [`GameSession::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) over: bool,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            over: false,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Recomputes the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays `player`'s mark at `(row, col)` and returns the new outcome.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the session unchanged, if the game is over,
    /// it is not `player`'s turn, or the cell is off the board or occupied.
    #[instrument(skip(self), fields(to_move = %self.to_move, moves = self.history.len()))]
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Outcome, InvalidMoveError> {
        if self.over {
            debug!("Move rejected: game over");
            return Err(InvalidMoveError::GameOver);
        }
        if player != self.to_move {
            debug!("Move rejected: wrong player");
            return Err(InvalidMoveError::WrongPlayer(player));
        }

        let position = self.board.apply_move(row, col, player)?;
        self.history.push(Move::new(player, position));

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
            self.over = true;
        } else {
            self.to_move = player.opponent();
        }

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after {:?}",
            self.history.last()
        );

        Ok(outcome)
    }

    /// Starts over: empty board, X to move, in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting session");
        self.board.clear();
        self.to_move = Player::X;
        self.over = false;
        self.history.clear();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
