//! Gato - tic-tac-toe against an unbeatable computer.

use anyhow::Result;
use clap::Parser;
use gato::{Cli, Command, Settings};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.into_command() {
        Command::Play(args) => {
            let settings = Settings::resolve(&args)?;
            gato::init_file_logging(settings.log_file())?;
            gato::run_tui(&settings)
        }
        Command::Analyze { board, json } => {
            gato::init_stderr_logging();
            let report = gato::analyze_board(&board, json)?;
            println!("{}", report);
            Ok(())
        }
    }
}
