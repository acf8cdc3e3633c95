//! Board storage with two interchangeable representations.
//!
//! The representation is chosen at construction and kept for the board's
//! lifetime, including across rotations. Bounds are checked once here,
//! at the access boundary, before dispatching to the storage variant.

mod dense;
mod packed;

pub use dense::DenseBoard;
pub use packed::PackedBoard;

use crate::error::{EngineError, EngineErrorKind};
use crate::pos::Pos;
use crate::types::{Cell, Representation, Rotation};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// A `width` x `height` grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Board {
    /// One slot per cell.
    Dense(DenseBoard),
    /// Two bits per cell.
    Packed(PackedBoard),
}

impl Board {
    /// Creates an all-empty board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::Construction`] if either extent is zero or
    /// the cell count overflows.
    #[instrument]
    pub fn new(
        width: usize,
        height: usize,
        representation: Representation,
    ) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::new(EngineErrorKind::Construction(format!(
                "board extents must be positive, got {}x{}",
                width, height
            ))));
        }
        if width.checked_mul(height).and_then(|n| n.checked_mul(2)).is_none() {
            return Err(EngineError::new(EngineErrorKind::Construction(format!(
                "board {}x{} is too large",
                width, height
            ))));
        }

        Ok(Self::empty(width, height, representation))
    }

    fn empty(width: usize, height: usize, representation: Representation) -> Self {
        match representation {
            Representation::Dense => Board::Dense(DenseBoard::new(width, height)),
            Representation::Packed => Board::Packed(PackedBoard::new(width, height)),
        }
    }

    /// Board width (number of columns).
    pub fn width(&self) -> usize {
        match self {
            Board::Dense(grid) => grid.width(),
            Board::Packed(grid) => grid.width(),
        }
    }

    /// Board height (number of rows).
    pub fn height(&self) -> usize {
        match self {
            Board::Dense(grid) => grid.height(),
            Board::Packed(grid) => grid.height(),
        }
    }

    /// Which storage strategy backs this board.
    pub fn representation(&self) -> Representation {
        match self {
            Board::Dense(_) => Representation::Dense,
            Board::Packed(_) => Representation::Packed,
        }
    }

    /// Returns true if `pos` addresses a cell of this board.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height() && pos.col < self.width()
    }

    fn check_bounds(&self, pos: Pos) -> Result<(), EngineError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::new(EngineErrorKind::OutOfBounds {
                pos,
                width: self.width(),
                height: self.height(),
            }))
        }
    }

    /// Reads the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::OutOfBounds`] if `pos` is off the board.
    pub fn get(&self, pos: Pos) -> Result<Cell, EngineError> {
        self.check_bounds(pos)?;
        Ok(self.cell_at(pos))
    }

    /// Overwrites the cell at `pos` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::OutOfBounds`] if `pos` is off the board.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> Result<(), EngineError> {
        self.check_bounds(pos)?;
        match self {
            Board::Dense(grid) => grid.set(pos, cell),
            Board::Packed(grid) => grid.set(pos, cell),
        }
        Ok(())
    }

    /// Unchecked read for positions already known to be in bounds.
    pub(crate) fn cell_at(&self, pos: Pos) -> Cell {
        match self {
            Board::Dense(grid) => grid.get(pos),
            Board::Packed(grid) => grid.get(pos),
        }
    }

    /// Every cell with its position, row-major. Call again to restart.
    pub fn iter(&self) -> Cells<'_> {
        Cells {
            board: self,
            next: 0,
            total: self.width() * self.height(),
        }
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&(_, c)| c == cell).count()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.iter().all(|(_, c)| !c.is_empty())
    }

    /// Builds the board turned a quarter in `rotation`'s direction.
    ///
    /// The result is `height` wide and `width` high and keeps this board's
    /// representation. Destination rows are filled in parallel from the
    /// unchanged source; the new board exists only once every row is done.
    #[instrument(skip(self), fields(width = self.width(), height = self.height()))]
    pub fn rotated(&self, rotation: Rotation) -> Board {
        let (old_width, old_height) = (self.width(), self.height());
        let (new_width, new_height) = (old_height, old_width);

        let rows: Vec<Vec<Cell>> = (0..new_height)
            .into_par_iter()
            .map(|row| {
                (0..new_width)
                    .map(|col| {
                        let source = rotation.source_of(Pos::new(row, col), old_width, old_height);
                        self.cell_at(source)
                    })
                    .collect()
            })
            .collect();

        debug!(new_width, new_height, "Rotated board assembled");
        Self::from_rows(self.representation(), new_width, rows)
    }

    fn from_rows(representation: Representation, width: usize, rows: Vec<Vec<Cell>>) -> Self {
        match representation {
            Representation::Dense => Board::Dense(DenseBoard::from_rows(width, rows)),
            Representation::Packed => {
                let mut grid = PackedBoard::new(width, rows.len());
                for (row, cells) in rows.into_iter().enumerate() {
                    for (col, cell) in cells.into_iter().enumerate() {
                        grid.set(Pos::new(row, col), cell);
                    }
                }
                Board::Packed(grid)
            }
        }
    }
}

/// Row-major iterator over a board's cells.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    board: &'a Board,
    next: usize,
    total: usize,
}

impl Iterator for Cells<'_> {
    type Item = (Pos, Cell);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let width = self.board.width();
        let pos = Pos::new(self.next / width, self.next % width);
        self.next += 1;
        Some((pos, self.board.cell_at(pos)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl<'a> IntoIterator for &'a Board {
    type Item = (Pos, Cell);
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Representation; 2] = [Representation::Dense, Representation::Packed];

    #[test]
    fn test_new_rejects_zero_extent() {
        for repr in BOTH {
            let err = Board::new(0, 3, repr).unwrap_err();
            assert!(matches!(err.kind(), EngineErrorKind::Construction(_)));
            assert!(Board::new(3, 0, repr).is_err());
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        for repr in BOTH {
            let board = Board::new(3, 3, repr).unwrap();
            assert_eq!(board.representation(), repr);
            assert_eq!(board.count(Cell::Empty), 9);
            assert!(!board.is_full());
        }
    }

    #[test]
    fn test_get_set_round_trip() {
        for repr in BOTH {
            let mut board = Board::new(3, 3, repr).unwrap();
            board.set(Pos::new(2, 1), Cell::Black).unwrap();
            board.set(Pos::new(0, 0), Cell::White).unwrap();
            assert_eq!(board.get(Pos::new(1, 2)).unwrap(), Cell::Empty);
            assert_eq!(board.get(Pos::new(2, 1)).unwrap(), Cell::Black);
            assert_eq!(board.get(Pos::new(0, 0)).unwrap(), Cell::White);
        }
    }

    #[test]
    fn test_one_past_the_end_is_out_of_bounds() {
        for repr in BOTH {
            let mut board = Board::new(3, 2, repr).unwrap();
            for pos in [Pos::new(2, 0), Pos::new(0, 3), Pos::new(2, 3)] {
                let err = board.get(pos).unwrap_err();
                assert!(matches!(err.kind(), EngineErrorKind::OutOfBounds { .. }));
                assert!(board.set(pos, Cell::Black).is_err());
            }
            assert_eq!(board.count(Cell::Empty), 6);
        }
    }

    #[test]
    fn test_iter_is_row_major_and_restartable() {
        let mut board = Board::new(2, 2, Representation::Packed).unwrap();
        board.set(Pos::new(1, 0), Cell::White).unwrap();

        let first: Vec<_> = board.iter().collect();
        assert_eq!(
            first,
            vec![
                (Pos::new(0, 0), Cell::Empty),
                (Pos::new(0, 1), Cell::Empty),
                (Pos::new(1, 0), Cell::White),
                (Pos::new(1, 1), Cell::Empty),
            ]
        );
        assert_eq!(board.iter().len(), 4);
        assert_eq!(board.iter().collect::<Vec<_>>(), first);
    }

    #[test]
    fn test_rotated_swaps_extents_and_keeps_representation() {
        for repr in BOTH {
            let mut board = Board::new(3, 2, repr).unwrap();
            board.set(Pos::new(0, 0), Cell::Black).unwrap();
            board.set(Pos::new(1, 2), Cell::White).unwrap();

            let cw = board.rotated(Rotation::Clockwise);
            assert_eq!((cw.width(), cw.height()), (2, 3));
            assert_eq!(cw.representation(), repr);
            assert_eq!(cw.get(Pos::new(0, 1)).unwrap(), Cell::Black);
            assert_eq!(cw.get(Pos::new(2, 0)).unwrap(), Cell::White);

            let ccw = board.rotated(Rotation::CounterClockwise);
            assert_eq!(ccw.get(Pos::new(2, 0)).unwrap(), Cell::Black);
            assert_eq!(ccw.get(Pos::new(0, 1)).unwrap(), Cell::White);
        }
    }

    #[test]
    fn test_rotated_matches_forward_transform() {
        let mut board = Board::new(4, 3, Representation::Dense).unwrap();
        let pattern = [Cell::Black, Cell::White, Cell::Empty];
        for i in 0..12 {
            board.set(Pos::new(i / 4, i % 4), pattern[i % 3]).unwrap();
        }
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            let turned = board.rotated(rotation);
            for (pos, cell) in &board {
                let dest = rotation.apply(pos, 4, 3);
                assert_eq!(turned.get(dest).unwrap(), cell);
            }
        }
    }

    #[test]
    fn test_rotate_there_and_back_restores() {
        let mut board = Board::new(5, 2, Representation::Packed).unwrap();
        board.set(Pos::new(1, 4), Cell::Black).unwrap();
        board.set(Pos::new(0, 2), Cell::White).unwrap();
        let back = board
            .rotated(Rotation::Clockwise)
            .rotated(Rotation::CounterClockwise);
        assert_eq!(back, board);
    }
}
