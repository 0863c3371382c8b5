//! Core domain types for tic-tac-toe.

use crate::{InvalidMoveError, ParseBoardError, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second; the computer in single-player games).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by player X.
    X,
    /// Marked by player O.
    O,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Returns true if no player has marked this cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major. Text form is three rows separated by `/`,
/// e.g. `X../.O./...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Gets the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Marks the cell at `(row, col)` for `player`.
    ///
    /// # Errors
    ///
    /// Fails without touching the board when the coordinates are off the
    /// board or the cell is already marked.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<Position, InvalidMoveError> {
        let pos =
            Position::from_coords(row, col).ok_or(InvalidMoveError::OutOfBounds { row, col })?;
        if !self.is_empty(pos) {
            return Err(InvalidMoveError::Occupied(pos));
        }
        self.set(pos, Cell::from(player));
        Ok(pos)
    }

    /// Overwrites a cell. Callers uphold the single-move discipline.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if the board is full (no empty cell left).
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::iter().filter(|&pos| self.is_empty(pos))
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        let mark = Cell::from(player);
        self.cells.iter().flatten().filter(|&&c| c == mark).count()
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the `Display` form. Whitespace and `/` are ignored; `.`, `_`
    /// and `-` all mean an empty cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(|c| match c {
                'X' | 'x' => Ok(Cell::X),
                'O' | 'o' => Ok(Cell::O),
                '.' | '_' | '-' => Ok(Cell::Empty),
                other => Err(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != 9 {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::iter().zip(cells) {
            board.set(pos, cell);
        }
        Ok(board)
    }
}
