//! Classification of a board as won, drawn or still in progress.

use super::draw::is_draw;
use super::win::check_win;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Outcome of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    InProgress,
    /// A player owns a full line.
    Win(Player),
    /// Board full, no line.
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Classifies the board.
///
/// Wins are checked before fullness, so a full board with a line is a win.
/// X is reported if both players somehow own a line.
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if check_win(board, Player::X) {
        Outcome::Win(Player::X)
    } else if check_win(board, Player::O) {
        Outcome::Win(Player::O)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
