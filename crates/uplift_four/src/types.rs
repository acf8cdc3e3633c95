//! Core domain types for the uplift-four engine.

use crate::pos::Pos;
use serde::{Deserialize, Serialize};

/// A side in the game. Black moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    /// Black (goes first).
    Black,
    /// White (goes second).
    White,
}

impl Color {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// A black piece.
    Black,
    /// A white piece.
    White,
}

impl Cell {
    /// Returns the color of the piece in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    /// Returns true if the cell holds no piece.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Two-bit code used by the packed board.
    pub(crate) fn bits(self) -> u64 {
        match self {
            Cell::Empty => 0b00,
            Cell::Black => 0b01,
            Cell::White => 0b10,
        }
    }

    /// Decodes a two-bit code. `0b11` is never written and decodes to `None`.
    pub(crate) fn from_bits(bits: u64) -> Option<Self> {
        match bits {
            0b00 => Some(Cell::Empty),
            0b01 => Some(Cell::Black),
            0b10 => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// Direction of a quarter turn of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Rotation {
    /// Quarter turn clockwise.
    Clockwise,
    /// Quarter turn counter-clockwise.
    CounterClockwise,
}

impl Rotation {
    /// Maps the boolean convention of the input driver onto a direction.
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        }
    }

    /// Returns the rotation that undoes this one.
    pub fn reverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Where `pos` on a board of the given extents lands after this rotation.
    ///
    /// The rotated board is `old_height` wide and `old_width` high.
    pub fn apply(self, pos: Pos, old_width: usize, old_height: usize) -> Pos {
        match self {
            Rotation::Clockwise => Pos::new(pos.col, old_height - 1 - pos.row),
            Rotation::CounterClockwise => Pos::new(old_width - 1 - pos.col, pos.row),
        }
    }

    /// Inverse of [`Rotation::apply`]: the old position that lands on `dest`.
    pub fn source_of(self, dest: Pos, old_width: usize, old_height: usize) -> Pos {
        match self {
            Rotation::Clockwise => Pos::new(old_height - 1 - dest.col, dest.row),
            Rotation::CounterClockwise => Pos::new(dest.col, old_width - 1 - dest.row),
        }
    }
}

/// Storage strategy for a board, fixed at construction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Representation {
    /// One cell per slot in a row-major grid.
    #[default]
    Dense,
    /// Two bits per cell in a flat word array.
    Packed,
}

/// Result of scanning the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winning run and at least one empty cell.
    InProgress,
    /// Black has a winning run.
    BlackWin,
    /// White has a winning run.
    WhiteWin,
    /// Board full, no winning run.
    Draw,
}

impl Outcome {
    /// Outcome for a winning run of `color`.
    pub fn win_for(color: Color) -> Self {
        match color {
            Color::Black => Outcome::BlackWin,
            Color::White => Outcome::WhiteWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::BlackWin => Some(Color::Black),
            Outcome::WhiteWin => Some(Color::White),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the caller should stop issuing moves.
    pub fn is_finished(self) -> bool {
        self != Outcome::InProgress
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::BlackWin => write!(f, "Black wins"),
            Outcome::WhiteWin => write!(f, "White wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
