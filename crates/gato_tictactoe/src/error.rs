//! Error types for the game engine.

use crate::{Player, Position};

/// A move that the board or session refuses to apply.
///
/// Rejection never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMoveError {
    /// Row or column outside 0-2.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position is already marked.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game already ended in a win or draw.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for InvalidMoveError {}

/// Error parsing a board from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character that is not a mark or an empty cell.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidCell(char),
}

impl std::error::Error for ParseBoardError {}
