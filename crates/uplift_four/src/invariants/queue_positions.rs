//! Queued positions point at pieces of the queue's color.

use super::Invariant;
use crate::game::Game;
use crate::types::{Cell, Color};
use strum::IntoEnumIterator;

/// Invariant: every queued position holds a piece of that queue's color.
///
/// Breaks if a rotation forgets to remap a queue or an uplift records the
/// wrong landing cell.
pub struct QueuePositionsInvariant;

impl Invariant<Game> for QueuePositionsInvariant {
    fn holds(game: &Game) -> bool {
        Color::iter().all(|color| {
            game.queue(color)
                .iter()
                .all(|pos| game.board().get(pos).ok() == Some(Cell::from(color)))
        })
    }

    fn description() -> &'static str {
        "Every queued position holds a piece of the queue's color"
    }
}
