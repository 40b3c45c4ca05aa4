//! Engine error types.
//!
//! Every gameplay error is recoverable: the engine stays in the
//! move-collection phase and the caller may retry with corrected input.
//! The only fail-fast case is constructing a board from an invalid scheme.

use super::coord::Direction;
use super::king::KingColor;
use crate::board::CellCode;

/// Errors returned by the engine's external interface.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A non-movement direction (`Top`/`Bottom`) was submitted.
    #[error("{0:?} is not a movement direction")]
    InvalidDirection(Direction),

    /// A move was submitted for a king that is no longer in play.
    #[error("the {0} king has been eliminated")]
    EliminatedKing(KingColor),

    /// A king tried to submit a second move in the same round.
    #[error("the {0} king has already submitted a move this round")]
    DuplicateSubmission(KingColor),

    /// An ownership override targeted a cell that is already captured.
    #[error("cell {0} is already captured")]
    AlreadyCaptured(CellCode),

    /// An ownership override targeted the Mind, which can never be owned.
    #[error("the Mind can never be owned")]
    MindCell,

    /// A move was submitted after the game finished.
    #[error("the game is over")]
    GameFinished,

    /// A board scheme was not a permutation of the 18 cell codes.
    #[error("board scheme is not a permutation of the 18 cell codes")]
    InvalidScheme,
}
