//! Queue lengths track piece counts.

use super::Invariant;
use crate::game::Game;
use crate::types::{Cell, Color};
use strum::IntoEnumIterator;

/// Invariant: each color's queue is exactly as long as its piece count.
pub struct QueueCountsInvariant;

impl Invariant<Game> for QueueCountsInvariant {
    fn holds(game: &Game) -> bool {
        Color::iter().all(|color| game.queue(color).len() == game.board().count(Cell::from(color)))
    }

    fn description() -> &'static str {
        "Each color's queue length equals its piece count"
    }
}
