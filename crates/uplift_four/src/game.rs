//! Game state and the transitions between moves.
//!
//! A [`Game`] owns the board and one placement-order queue per color. Every
//! successful move flips the turn; a rejected move leaves the game exactly
//! as it was so the same player can try again.

use crate::action::Command;
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{EngineError, EngineErrorKind};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::pos::Pos;
use crate::queue::PosQueue;
use crate::rules;
use crate::types::{Cell, Color, Outcome, Representation, Rotation};
use tracing::{debug, info, instrument, warn};

/// An uplift-four game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    run: usize,
    board: Board,
    black_queue: PosQueue,
    white_queue: PosQueue,
    player: Color,
    last_rotation: Option<Rotation>,
}

impl Game {
    /// Creates a game with an empty board and Black to move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::Construction`] if `run` is zero, either
    /// extent is zero, or `run` exceeds both extents (no run could ever fit).
    #[instrument]
    pub fn new(
        run: usize,
        width: usize,
        height: usize,
        representation: Representation,
    ) -> Result<Self, EngineError> {
        if run == 0 {
            return Err(EngineError::new(EngineErrorKind::Construction(
                "run length must be positive".to_string(),
            )));
        }
        if run > width && run > height {
            warn!("Run longer than both board extents");
            return Err(EngineError::new(EngineErrorKind::Construction(format!(
                "run {} cannot fit on a {}x{} board",
                run, width, height
            ))));
        }

        let board = Board::new(width, height, representation)?;
        info!("New game created");

        Ok(Self {
            run,
            board,
            black_queue: PosQueue::new(),
            white_queue: PosQueue::new(),
            player: Color::Black,
            last_rotation: None,
        })
    }

    /// Creates a game from a [`GameConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        Self::new(
            *config.run(),
            *config.width(),
            *config.height(),
            *config.representation(),
        )
    }

    /// Winning run length.
    pub fn run(&self) -> usize {
        self.run
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Side to move.
    pub fn player(&self) -> Color {
        self.player
    }

    /// Direction of the previous move if it was a rotation.
    pub fn last_rotation(&self) -> Option<Rotation> {
        self.last_rotation
    }

    /// Placement-order queue for `color`, oldest first.
    pub fn queue(&self, color: Color) -> &PosQueue {
        match color {
            Color::Black => &self.black_queue,
            Color::White => &self.white_queue,
        }
    }

    fn queue_mut(&mut self, color: Color) -> &mut PosQueue {
        match color {
            Color::Black => &mut self.black_queue,
            Color::White => &mut self.white_queue,
        }
    }

    /// Places the current player's piece on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::OutOfBounds`] for a position off the board
    /// and [`EngineErrorKind::IllegalMove`] for an occupied cell. The turn
    /// does not advance on failure.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn place_piece(&mut self, pos: Pos) -> Result<(), EngineError> {
        if !self.board.get(pos)?.is_empty() {
            warn!("Cell already occupied");
            return Err(EngineError::new(EngineErrorKind::IllegalMove(pos)));
        }

        let color = self.player;
        self.board.set(pos, Cell::from(color))?;
        self.queue_mut(color).enqueue(pos);
        self.player = color.opponent();
        self.last_rotation = None;

        debug!("Piece placed");
        self.debug_check_invariants();
        Ok(())
    }

    /// Turns the board a quarter clockwise or counter-clockwise.
    ///
    /// Both queues are remapped through the same transform as the cells, so
    /// placement order survives the turn.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::IllegalRotation`] if this would undo the
    /// rotation made on the previous move. Nothing changes on failure.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn rotate(&mut self, clockwise: bool) -> Result<(), EngineError> {
        let rotation = Rotation::from_clockwise(clockwise);
        if let Some(previous) = self.last_rotation
            && previous == rotation.reverse()
        {
            warn!(%previous, "Rotation would undo the previous one");
            return Err(EngineError::new(EngineErrorKind::IllegalRotation(previous)));
        }

        let (old_width, old_height) = (self.board.width(), self.board.height());
        self.board = self.board.rotated(rotation);

        let remap = |pos: Pos| rotation.apply(pos, old_width, old_height);
        self.black_queue.remap(remap);
        self.white_queue.remap(remap);

        self.last_rotation = Some(rotation);
        self.player = self.player.opponent();

        debug!(%rotation, "Board rotated");
        self.debug_check_invariants();
        Ok(())
    }

    /// Lifts the oldest piece of `color` toward row 0.
    ///
    /// The piece slides up its column until the cell above it is occupied or
    /// it reaches row 0, then goes to the back of its queue. A piece already
    /// on row 0 stays put, is re-queued at the back, and the move still
    /// consumes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::NoPieceToLift`] if `color` has no pieces.
    /// The turn does not advance on failure.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn uplift(&mut self, color: Color) -> Result<(), EngineError> {
        let Some(from) = self.queue(color).front() else {
            warn!("No piece to lift");
            return Err(EngineError::new(EngineErrorKind::NoPieceToLift(color)));
        };

        // Find the landing cell before touching anything.
        let mut to = from;
        while to.row > 0 && self.board.get(Pos::new(to.row - 1, to.col))?.is_empty() {
            to.row -= 1;
        }

        if to == from {
            debug!(%from, "Piece cannot move");
        } else {
            self.board.set(from, Cell::Empty)?;
            self.board.set(to, Cell::from(color))?;
            debug!(%from, %to, "Piece lifted");
        }
        let queue = self.queue_mut(color);
        queue.dequeue()?;
        queue.enqueue(to);

        self.player = self.player.opponent();
        self.last_rotation = None;

        self.debug_check_invariants();
        Ok(())
    }

    /// Applies a driver command.
    ///
    /// # Errors
    ///
    /// Whatever the dispatched operation returns.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<(), EngineError> {
        match command {
            Command::Place(pos) => self.place_piece(pos),
            Command::Rotate { clockwise } => self.rotate(clockwise),
            Command::Uplift(color) => self.uplift(color),
        }
    }

    /// Evaluates the board. Has no side effects.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board, self.run)
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = EngineInvariants::check_all(self);
            if let Err(violations) = &result {
                for violation in violations {
                    warn!(description = %violation.description, "Invariant violated");
                }
            }
            debug_assert!(result.is_ok(), "Engine invariants violated: {:?}", result);
        }
    }
}
