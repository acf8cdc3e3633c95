//! Board coordinates.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the board.
///
/// Row 0 is the top edge; uplift moves pieces toward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Pos {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Pos {
    /// Steps `d_row` rows and `d_col` columns away from this position.
    ///
    /// Returns `None` when the step would go above row 0 or left of column 0.
    /// Upper bounds are the board's business.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Pos> {
        Some(Pos {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Row-major index of this position on a board `width` cells wide.
    pub fn linear_index(self, width: usize) -> usize {
        self.row * width + self.col
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
