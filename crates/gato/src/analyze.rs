//! `analyze` command: the computer's view of a position.

use anyhow::{Context, Result, bail};
use gato_tictactoe::{Analysis, Board, Minimax, Outcome, Player, evaluate_outcome};
use std::fmt::Write;
use tracing::instrument;

/// Searches `board_text` (O to move) and renders the result as text or JSON.
///
/// # Errors
///
/// Fails if the board does not parse, is already decided, or it is not O's
/// turn (X moves first, so O has exactly one mark fewer).
#[instrument]
pub fn analyze_board(board_text: &str, json: bool) -> Result<String> {
    let board: Board = board_text
        .parse()
        .with_context(|| format!("Invalid board {:?}", board_text))?;

    let outcome = evaluate_outcome(&board);
    if outcome != Outcome::InProgress {
        bail!("Board {} is already decided: {}", board, outcome);
    }
    if board.count(Player::X) != board.count(Player::O) + 1 {
        bail!(
            "Board {} does not have O to move (X has {} marks, O has {})",
            board,
            board.count(Player::X),
            board.count(Player::O)
        );
    }

    let analysis = Minimax::analyze(&board);
    if json {
        Ok(serde_json::to_string_pretty(&analysis)?)
    } else {
        Ok(render(&board, &analysis))
    }
}

fn render(board: &Board, analysis: &Analysis) -> String {
    let mut out = String::new();
    for row in board.to_string().split('/') {
        let _ = writeln!(out, "  {}", row);
    }
    let best = analysis.position();
    let _ = writeln!(
        out,
        "Best move for O: {} ({}, {}), score {}",
        best,
        best.row(),
        best.col(),
        analysis.score()
    );
    for candidate in analysis.move_scores() {
        let _ = writeln!(out, "  {:<14} {:>3}", candidate.position.label(), candidate.score);
    }
    let _ = write!(out, "Positions searched: {}", analysis.nodes());
    out
}
