//! Tic-tac-toe game logic with an unbeatable computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s, applies single moves
//! - **Rules**: win/draw detection, [`Outcome`] derived from the board
//! - **Search**: exhaustive minimax choosing O's move ([`choose_move`])
//! - **Session**: owned, resettable state of one game ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use gato_tictactoe::{choose_move, GameSession, Outcome, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.apply_move(0, 0, Player::X).unwrap();
//!
//! let reply = choose_move(session.board());
//! assert_eq!(reply, Position::Center);
//!
//! let outcome = session.apply_move(reply.row(), reply.col(), Player::O).unwrap();
//! assert_eq!(outcome, Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod invariants;
mod position;
mod rules;
mod search;
mod session;
mod types;

pub use error::{InvalidMoveError, ParseBoardError};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, SessionInvariants,
};
pub use position::Position;
pub use rules::{Outcome, check_win, evaluate_outcome, is_draw, is_full};
pub use search::{Analysis, Minimax, MoveScore, choose_move};
pub use session::{GameSession, Move};
pub use types::{Board, Cell, Player};
