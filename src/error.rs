//! Error types for the session engine.

use crate::models::SessionPhase;
use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors returned by session operations. None of them leave the session
/// partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot start a session with an empty deck")]
    EmptyDeck,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("{operation} is not allowed while {phase}")]
    InvalidOperationForState {
        operation: &'static str,
        phase: SessionPhase,
    },
}
