//! Text rendering of a board.

use crate::input::label;
use uplift_four::{Board, Cell};

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Black => '*',
        Cell::White => 'o',
    }
}

/// Renders the board with column labels on top and row labels on the left.
pub fn render(board: &Board) -> String {
    let mut out = String::from(" ");
    out.extend((0..board.width()).map(label));
    out.push('\n');

    for (pos, cell) in board {
        if pos.col == 0 {
            out.push(label(pos.row));
        }
        out.push(symbol(cell));
        if pos.col + 1 == board.width() {
            out.push('\n');
        }
    }
    out
}
