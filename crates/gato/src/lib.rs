//! Gato - tic-tac-toe in the terminal.
//!
//! The presentation layer around [`gato_tictactoe`].
//!
//! # Architecture
//!
//! - **Controller**: owns the game session, asks the computer for O's move
//! - **TUI**: ratatui board with mouse and keyboard input, menu, status line
//! - **Settings/CLI**: clap flags over an optional TOML file
//! - **Analyze**: prints the search's verdict on a position

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod controller;
mod logging;
mod players;
mod settings;
mod tui;

pub use analyze::analyze_board;
pub use cli::{Cli, Command, PlayArgs};
pub use controller::{COMPUTER, Controller, HUMAN, TurnReport};
pub use logging::{init_file as init_file_logging, init_stderr as init_stderr_logging};
pub use players::{ComputerPlayer, Opponent};
pub use settings::{ConfigError, GameMode, Settings};
pub use tui::{App, MenuItem, ScreenLayout, run as run_tui};
