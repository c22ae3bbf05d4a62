//! Engine error types.

use crate::games::tictactoe::Outcome;
use derive_more::{Display, Error};

/// Why the engine refused a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// The board is already terminal, so there is nothing to search.
    #[display("cannot select a move, game is over ({})", _0)]
    GameOver(Outcome),
}

/// Invalid move request with location tracking.
///
/// Signals a caller bug: the engine was asked to move on a finished board.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
