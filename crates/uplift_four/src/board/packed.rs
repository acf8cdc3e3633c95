//! Two-bits-per-cell storage.
//!
//! Cell `(r, c)` is bit pair `r * width + c` in a little-endian stream of
//! `u64` words: bit index `(r * width + c) * 2`, word `bit / 64`, offset
//! `bit % 64`. A pair never straddles two words.

use crate::pos::Pos;
use crate::types::Cell;

const WORD_BITS: usize = u64::BITS as usize;
const CELL_BITS: usize = 2;
const CELL_MASK: u64 = 0b11;

/// Bit-packed grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBoard {
    width: usize,
    height: usize,
    words: Vec<u64>,
}

impl PackedBoard {
    /// Creates an all-empty grid. Extents are validated by the caller.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let total_bits = width * height * CELL_BITS;
        Self {
            width,
            height,
            words: vec![0; total_bits.div_ceil(WORD_BITS)],
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    fn word_count(&self) -> usize {
        self.words.len()
    }

    fn locate(&self, pos: Pos) -> (usize, usize) {
        let bit_index = pos.linear_index(self.width) * CELL_BITS;
        (bit_index / WORD_BITS, bit_index % WORD_BITS)
    }

    pub(crate) fn get(&self, pos: Pos) -> Cell {
        let (word, offset) = self.locate(pos);
        let code = (self.words[word] >> offset) & CELL_MASK;
        // 0b11 is never written.
        Cell::from_bits(code).unwrap_or_default()
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        let (word, offset) = self.locate(pos);
        self.words[word] &= !(CELL_MASK << offset);
        self.words[word] |= cell.bits() << offset;
    }
}
