//! One-slot-per-cell grid storage.

use crate::pos::Pos;
use crate::types::Cell;

/// Row-major grid of cells, `height` rows of `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBoard {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl DenseBoard {
    /// Creates an all-empty grid. Extents are validated by the caller.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    /// Adopts pre-built rows, each exactly `width` long.
    pub(crate) fn from_rows(width: usize, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self {
            width,
            height: rows.len(),
            rows,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn get(&self, pos: Pos) -> Cell {
        self.rows[pos.row][pos.col]
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.rows[pos.row][pos.col] = cell;
    }
}
