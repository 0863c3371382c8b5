//! Exhaustive minimax search for the computer player.
//!
//! The computer always plays O and maximizes; X minimizes. Terminal scores
//! are `10 - depth` for an O win, `depth - 10` for an X win and `0` for a
//! draw, where depth counts moves since the searched position. Faster wins
//! and slower losses score better.
//!
//! The full 3x3 tree is small enough that no pruning is needed.

use crate::{Board, Cell, Outcome, Player, Position, evaluate_outcome};
use derive_getters::Getters;
use serde::Serialize;
use std::ops::{Deref, DerefMut};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Score of a win found on the very position searched.
const WIN_SCORE: i32 = 10;

/// The player the search moves for.
const MAXIMIZER: Player = Player::O;

/// Minimax value of one candidate move at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveScore {
    /// Where O would play.
    pub position: Position,
    /// Value of the resulting position under optimal play.
    pub score: i32,
}

/// Result of searching a position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, derive_new::new)]
pub struct Analysis {
    /// Chosen move: the first, in row-major order, with the greatest score.
    position: Position,
    /// Score of the chosen move.
    score: i32,
    /// Score of every empty cell, row-major.
    move_scores: Vec<MoveScore>,
    /// Positions visited, root children included.
    nodes: u64,
}

/// Minimax searcher.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Searches `board` with O to move.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cell. Callers check the outcome
    /// before asking for a move.
    #[instrument(skip(board), fields(board = %board))]
    pub fn analyze(board: &Board) -> Analysis {
        assert!(
            !board.is_full(),
            "minimax search needs at least one empty cell: {}",
            board
        );

        let mut search = Self::default();
        let mut scratch = *board;
        let mut move_scores = Vec::new();
        let mut best: Option<MoveScore> = None;

        for position in Position::iter() {
            if !scratch.is_empty(position) {
                continue;
            }
            let score = {
                let mut placed = Placement::new(&mut scratch, position, MAXIMIZER);
                search.value(&mut placed, MAXIMIZER.opponent(), 1)
            };
            let candidate = MoveScore { position, score };
            move_scores.push(candidate);
            if best.is_none_or(|b| score > b.score) {
                best = Some(candidate);
            }
        }

        debug_assert_eq!(&scratch, board);
        let best = best.expect("non-full board has an empty cell");
        debug!(
            position = %best.position,
            score = best.score,
            nodes = search.nodes,
            "Search complete"
        );
        Analysis::new(best.position, best.score, move_scores, search.nodes)
    }

    /// Value of `board` with `to_move` on turn, `depth` moves below the root.
    fn value(&mut self, board: &mut Board, to_move: Player, depth: i32) -> i32 {
        self.nodes += 1;

        match evaluate_outcome(board) {
            Outcome::Win(Player::O) => return WIN_SCORE - depth,
            Outcome::Win(Player::X) => return depth - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let maximizing = to_move == MAXIMIZER;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for position in Position::iter() {
            if !board.is_empty(position) {
                continue;
            }
            let mut placed = Placement::new(board, position, to_move);
            let score = self.value(&mut placed, to_move.opponent(), depth + 1);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// Picks O's move on `board`.
///
/// Equal scores resolve to the earliest cell in row-major order. The board
/// is left untouched.
///
/// # Panics
///
/// Panics if the board is full.
pub fn choose_move(board: &Board) -> Position {
    *Minimax::analyze(board).position()
}

/// A hypothetical mark, erased again when dropped.
struct Placement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, position: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(position));
        board.set(position, Cell::from(player));
        Self { board, position }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Cell::Empty);
    }
}
