//! Outcome rules for uplift-four.
//!
//! Pure functions over a [`Board`]; nothing here mutates state, so
//! evaluation can be repeated freely.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Direction, check_winner, run_from};

use crate::board::Board;
use crate::types::Outcome;
use tracing::instrument;

/// Scans the board for a winning run of length `run`, then for a draw.
#[instrument(skip(board), fields(width = board.width(), height = board.height()))]
pub fn evaluate(board: &Board, run: usize) -> Outcome {
    if let Some(color) = check_winner(board, run) {
        return Outcome::win_for(color);
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
