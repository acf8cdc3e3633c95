//! Win detection.

use crate::board::Board;
use crate::pos::Pos;
use crate::types::{Cell, Color};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A direction a run is read in from its starting cell.
///
/// Declaration order is scan order and breaks ties between runs found at
/// the same starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Along the row, increasing column.
    Right,
    /// Down the column, increasing row.
    Down,
    /// Increasing row and column.
    DownRight,
    /// Decreasing row, increasing column.
    UpRight,
}

impl Direction {
    /// Row and column step for one cell in this direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
        }
    }
}

/// Returns the color owning a full run of `run` cells from `start` in `direction`.
///
/// Runs that would leave the board are never considered, and neither are
/// runs starting on an empty or off-board cell.
pub fn run_from(board: &Board, start: Pos, direction: Direction, run: usize) -> Option<Color> {
    let color = board.get(start).ok()?.color()?;
    let (d_row, d_col) = direction.step();
    let span = isize::try_from(run.checked_sub(1)?).ok()?;

    let end = start.offset(d_row * span, d_col * span)?;
    if !board.contains(end) {
        return None;
    }

    let expected = Cell::from(color);
    (1..=span)
        .all(|i| start.offset(d_row * i, d_col * i).map(|p| board.cell_at(p)) == Some(expected))
        .then_some(color)
}

/// Checks if there is a winner on the board.
///
/// Cells are visited row-major and every direction is tried from each
/// occupied cell; the first full run found decides.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, run: usize) -> Option<Color> {
    for (pos, cell) in board {
        if cell.is_empty() {
            continue;
        }
        for direction in Direction::iter() {
            if let Some(color) = run_from(board, pos, direction, run) {
                debug!(%pos, ?direction, %color, "Winning run found");
                return Some(color);
            }
        }
    }
    None
}
