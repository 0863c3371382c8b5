//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here is stored;
//! the outcome is recomputed from the cells every time it is asked for.

mod draw;
mod outcome;
mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, evaluate_outcome};
pub use win::check_win;
