//! Command-line interface for gato.

use crate::settings::GameMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Gato - tic-tac-toe against an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "gato")]
#[command(about = "Tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the requested command, `play` with defaults if none was given.
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal with mouse or keyboard
    Play(PlayArgs),

    /// Print the computer's move for a board with O to move
    Analyze {
        /// Board as three rows separated by '/', '.' for empty (e.g. "X../.O./..X")
        board: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Options for the `play` command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Game mode (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file path (overrides the settings file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_plays_with_defaults() {
        let cli = Cli::try_parse_from(["gato"]).unwrap();
        assert_eq!(cli.into_command(), Command::Play(PlayArgs::default()));
    }

    #[test]
    fn test_play_mode_flag() {
        let cli = Cli::try_parse_from(["gato", "play", "--mode", "two-player"]).unwrap();
        match cli.into_command() {
            Command::Play(args) => assert_eq!(args.mode, Some(GameMode::TwoPlayer)),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from(["gato", "analyze", "X../.../...", "--json"]).unwrap();
        assert_eq!(
            cli.into_command(),
            Command::Analyze {
                board: "X../.../...".to_string(),
                json: true,
            }
        );
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["gato", "play", "--mode", "hard"]).is_err());
    }
}
