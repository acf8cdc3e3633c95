//! Draw detection.

use super::win::check_winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cells).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winning run of length `run`.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, run: usize) -> bool {
    is_full(board) && check_winner(board, run).is_none()
}
