//! Uplift Four - rule engine for a rotating Connect-4 variant
//!
//! Four-in-a-row on an arbitrary `width` x `height` board with two extra
//! moves: a quarter-turn **rotation** of the whole board, and an **uplift**
//! that slides the oldest piece of a color up its column.
//!
//! # Architecture
//!
//! - **Pos / PosQueue**: coordinates and per-color placement order
//! - **Board**: dense or bit-packed cell storage
//! - **Game**: turn order, moves, and outcome evaluation
//! - **Rules**: stateless win and draw detection
//!
//! # Example
//!
//! ```
//! use uplift_four::{Game, Outcome, Pos, Representation};
//!
//! # fn example() -> Result<(), uplift_four::EngineError> {
//! let mut game = Game::new(3, 3, 3, Representation::Packed)?;
//! game.place_piece(Pos::new(0, 0))?; // black
//! game.place_piece(Pos::new(1, 0))?; // white
//! game.rotate(true)?;                // black
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod error;
mod game;
pub mod invariants;
mod pos;
mod queue;
pub mod rules;
mod types;

pub use action::Command;
pub use board::{Board, Cells, DenseBoard, PackedBoard};
pub use config::{ConfigError, GameConfig};
pub use error::{EngineError, EngineErrorKind};
pub use game::Game;
pub use pos::Pos;
pub use queue::PosQueue;
pub use types::{Cell, Color, Outcome, Representation, Rotation};
