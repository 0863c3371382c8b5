//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};

/// The 8 lines that win: rows, columns, diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if `player` has three in a row anywhere on the board.
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Cell::from(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.cell(pos) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert!(check_win(&board, Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/.O./OX.".parse().unwrap();
        assert!(check_win(&board, Player::O));
        assert!(!check_win(&board, Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert!(!check_win(&board, Player::X));
    }
}
