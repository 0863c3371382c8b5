//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use super::layout::{MenuItem, ScreenLayout};
use crate::controller::{Controller, TurnReport};
use crate::settings::GameMode;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use gato_tictactoe::{Outcome, Position};
use tracing::debug;

/// Main application state.
pub struct App {
    controller: Controller,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(mode: GameMode) -> Self {
        Self::with_controller(Controller::new(mode))
    }

    /// Creates an application around an existing controller.
    pub fn with_controller(controller: Controller) -> Self {
        let mut app = Self {
            controller,
            cursor: Position::Center,
            status_message: String::new(),
            should_quit: false,
        };
        app.status_message = app.turn_prompt();
        app
    }

    /// Gets the controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Plays a cell chosen by mouse or keyboard.
    ///
    /// Ignored while the game is over; rejected moves are only logged.
    pub fn select(&mut self, position: Position) {
        self.cursor = position;
        if !self.controller.accepts_input() {
            debug!(%position, "Input ignored: not accepting moves");
            return;
        }
        match self.controller.play(position) {
            Ok(report) => self.status_message = self.describe(&report),
            Err(e) => debug!(%position, error = %e, "Input ignored"),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.activate(MenuItem::Quit),
            KeyCode::Char('n') | KeyCode::Char('r') => self.activate(MenuItem::NewGame),
            KeyCode::Char('m') => self.activate(MenuItem::Mode),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(position) = digit_position(other) {
                    self.select(position);
                }
            }
        }
    }

    /// Handles a mouse event; only left clicks act.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(item) = layout.menu_item_at(mouse.column, mouse.row) {
            self.activate(item);
        } else if let Some(position) = layout.cell_at(mouse.column, mouse.row) {
            self.select(position);
        } else {
            debug!(column = mouse.column, row = mouse.row, "Click outside board");
        }
    }

    /// Runs a menu entry.
    pub fn activate(&mut self, item: MenuItem) {
        debug!(?item, "Menu item activated");
        match item {
            MenuItem::NewGame => {
                self.controller.new_game();
                self.status_message = format!("New game. {}", self.turn_prompt());
            }
            MenuItem::Mode => {
                let mode = self.controller.mode().toggle();
                self.controller.set_mode(mode);
                self.status_message = format!("Mode: {}. {}", mode, self.turn_prompt());
            }
            MenuItem::Quit => self.should_quit = true,
        }
    }

    fn describe(&self, report: &TurnReport) -> String {
        if report.outcome.is_terminal() {
            return game_over_message(report.outcome);
        }
        match report.reply {
            Some(reply) => format!(
                "{} played {}. {}",
                self.controller.opponent_name(),
                reply.position,
                self.turn_prompt()
            ),
            None => self.turn_prompt(),
        }
    }

    fn turn_prompt(&self) -> String {
        let session = self.controller.session();
        match self.controller.mode() {
            GameMode::VsComputer => format!("Your move ({}).", session.to_move()),
            GameMode::TwoPlayer => format!("Player {} to move.", session.to_move()),
        }
    }
}

fn game_over_message(outcome: Outcome) -> String {
    format!("{} Press 'n' for a new game or 'q' to quit.", outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use gato_tictactoe::{Cell, Player};
    use ratatui::layout::Rect;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn center_of(layout: &ScreenLayout, position: Position) -> (u16, u16) {
        let rect = layout.cell(position);
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_click_plays_and_computer_answers() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        let mut app = App::new(GameMode::VsComputer);

        let (x, y) = center_of(&layout, Position::TopLeft);
        app.handle_mouse(click(x, y), &layout);

        let session = app.controller().session();
        assert_eq!(session.cell(0, 0), Some(Cell::X));
        assert_eq!(session.cell(1, 1), Some(Cell::O));
        assert!(app.status_message().contains("Computer played Center"));
    }

    #[test]
    fn test_click_on_occupied_cell_ignored() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        let mut app = App::new(GameMode::TwoPlayer);
        let (x, y) = center_of(&layout, Position::Center);

        app.handle_mouse(click(x, y), &layout);
        let status = app.status_message().to_string();
        app.handle_mouse(click(x, y), &layout);

        assert_eq!(app.controller().session().history().len(), 1);
        assert_eq!(app.controller().session().to_move(), Player::O);
        assert_eq!(app.status_message(), status);
    }

    #[test]
    fn test_right_click_ignored() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        let mut app = App::new(GameMode::TwoPlayer);
        let (x, y) = center_of(&layout, Position::Center);
        let mut event = click(x, y);
        event.kind = MouseEventKind::Down(MouseButton::Right);

        app.handle_mouse(event, &layout);
        assert!(app.controller().session().history().is_empty());
    }

    #[test]
    fn test_menu_click_quits() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        let mut app = App::new(GameMode::VsComputer);
        let quit = layout.menu[2];
        app.handle_mouse(click(quit.x, quit.y), &layout);
        assert!(app.should_quit());
    }

    #[test]
    fn test_keyboard_play_and_new_game() {
        let mut app = App::new(GameMode::TwoPlayer);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.controller().session().cell(0, 1), Some(Cell::X));

        app.handle_key(KeyCode::Char('n'));
        assert!(app.controller().session().history().is_empty());
        assert!(app.status_message().starts_with("New game."));
    }

    #[test]
    fn test_input_ignored_after_game_over() {
        let mut app = App::new(GameMode::TwoPlayer);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.controller().session().outcome(), Outcome::Win(Player::X));
        assert!(app.status_message().starts_with("Player X wins!"));

        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.controller().session().history().len(), 5);
    }

    #[test]
    fn test_mode_toggle_resets_game() {
        let mut app = App::new(GameMode::VsComputer);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('m'));
        assert_eq!(app.controller().mode(), GameMode::TwoPlayer);
        assert!(app.controller().session().history().is_empty());
        assert!(app.status_message().contains("Two Players"));
    }
}
