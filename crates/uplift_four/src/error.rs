//! Engine error types.

use crate::pos::Pos;
use crate::types::{Color, Rotation};
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong in an engine call.
///
/// Every kind except [`EngineErrorKind::Construction`] leaves the engine
/// exactly as it was before the failed call.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// Invalid width, height or run length at construction.
    #[display("Invalid construction: {}", _0)]
    Construction(String),

    /// Position outside the board extents.
    #[display("Position {} is outside the {}x{} board", pos, width, height)]
    OutOfBounds {
        /// The rejected position.
        pos: Pos,
        /// Board width at the time of the call.
        width: usize,
        /// Board height at the time of the call.
        height: usize,
    },

    /// Placement onto an occupied cell.
    #[display("Cell {} is already occupied", _0)]
    IllegalMove(Pos),

    /// Rotation that would undo the immediately preceding rotation.
    #[display("Cannot undo the previous {} rotation", _0)]
    IllegalRotation(Rotation),

    /// Uplift requested for a color with no pieces on the board.
    #[display("No {} piece to lift", _0)]
    NoPieceToLift(Color),

    /// Dequeue from an empty position queue.
    #[display("Position queue is empty")]
    EmptyQueue,
}

impl std::error::Error for EngineErrorKind {}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(skip(kind))]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_records_call_site() {
        let err = EngineError::new(EngineErrorKind::EmptyQueue);
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn test_display_includes_kind() {
        let err = EngineError::new(EngineErrorKind::IllegalMove(Pos::new(1, 2)));
        let text = err.to_string();
        assert!(text.contains("(1, 2)"));
        assert!(text.contains("occupied"));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let kind = EngineErrorKind::OutOfBounds {
            pos: Pos::new(3, 0),
            width: 3,
            height: 3,
        };
        assert_eq!(kind.to_string(), "Position (3, 0) is outside the 3x3 board");
    }
}
