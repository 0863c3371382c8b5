//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::{Board, Player};

/// Checks if the board is full (all cells marked).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which neither player has a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Player::X) && !check_win(board, Player::O)
}
