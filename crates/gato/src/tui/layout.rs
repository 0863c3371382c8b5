//! Screen geometry shared by rendering and mouse hit-testing.

use gato_tictactoe::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 12;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Entries of the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Discard the game and start over.
    NewGame,
    /// Switch between single-player and two-player.
    Mode,
    /// Leave the program.
    Quit,
}

impl MenuItem {
    /// Menu entries, left to right.
    pub const ALL: [MenuItem; 3] = [MenuItem::NewGame, MenuItem::Mode, MenuItem::Quit];

    /// Label shown in the menu bar.
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::NewGame => " New Game (n) ",
            MenuItem::Mode => " Mode (m) ",
            MenuItem::Quit => " Quit (q) ",
        }
    }
}

/// Where everything sits on screen for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Menu entries, in [`MenuItem::ALL`] order.
    pub menu: [Rect; 3],
    /// Title line.
    pub title: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Grid lines between board rows.
    pub horizontal_lines: [Rect; 2],
    /// Grid lines between board columns, two per board row.
    pub vertical_lines: [Rect; 6],
    /// Status box.
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),         // Menu
                Constraint::Length(2),         // Title
                Constraint::Min(BOARD_HEIGHT), // Board
                Constraint::Length(3),         // Status
            ])
            .split(area);

        let mut layout = Self {
            title: chunks[1],
            status: chunks[3],
            ..Self::default()
        };

        let menu = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(MenuItem::NewGame.label().len() as u16),
                Constraint::Length(1),
                Constraint::Length(MenuItem::Mode.label().len() as u16),
                Constraint::Length(1),
                Constraint::Length(MenuItem::Quit.label().len() as u16),
                Constraint::Min(0),
            ])
            .split(chunks[0]);
        layout.menu = [menu[0], menu[2], menu[4]];

        let board = center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(board);
        layout.horizontal_lines = [rows[1], rows[3]];

        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                layout.cells[row * 3 + col] = cols[col * 2];
            }
            layout.vertical_lines[row * 2] = cols[1];
            layout.vertical_lines[row * 2 + 1] = cols[3];
        }

        layout
    }

    /// Board cell under a terminal coordinate; grid lines and margins miss.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|&rect| hit(rect, column, row))
            .and_then(Position::from_index)
    }

    /// Menu entry under a terminal coordinate.
    pub fn menu_item_at(&self, column: u16, row: u16) -> Option<MenuItem> {
        self.menu
            .iter()
            .position(|&rect| hit(rect, column, row))
            .map(|i| MenuItem::ALL[i])
    }

    /// Rectangle of a board cell.
    pub fn cell(&self, position: Position) -> Rect {
        self.cells[position.index()]
    }
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column < rect.right() && row >= rect.top() && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
