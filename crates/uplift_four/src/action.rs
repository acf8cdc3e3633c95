//! Structured commands an input driver hands to the engine.
//!
//! The engine never parses text; a driver decodes its own protocol into a
//! [`Command`] and calls [`Game::apply`](crate::Game::apply).

use crate::pos::Pos;
use crate::types::{Color, Rotation};
use serde::{Deserialize, Serialize};

/// One player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place the current player's piece.
    Place(Pos),
    /// Quarter-turn the board.
    Rotate {
        /// True for clockwise, false for counter-clockwise.
        clockwise: bool,
    },
    /// Lift the oldest piece of a color.
    Uplift(Color),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Place(pos) => write!(f, "place at {}", pos),
            Command::Rotate { clockwise } => {
                write!(f, "rotate {}", Rotation::from_clockwise(*clockwise))
            }
            Command::Uplift(color) => write!(f, "uplift {}", color),
        }
    }
}
