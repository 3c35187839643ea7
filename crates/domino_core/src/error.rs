//! Error taxonomy shared by the board, the move generator and the search.

use crate::types::{Domino, End};

/// Unified error type for the domino core.
///
/// `InvalidState` and `IllegalMove` are input-validation failures raised
/// synchronously to the caller; a failed board operation never changes
/// the board. `AnalysisFailure` marks an unexpected fault inside search and
/// is absorbed by the analysis layer rather than surfaced to end users.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DominoError {
    /// An operation was attempted while the board was not in the state it
    /// requires (for example seeding a board that already has dominoes).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A placement does not match the open value of its target end, or the
    /// target end does not exist yet.
    #[error("cannot place {domino} on {end} end (open value: {open:?})")]
    IllegalMove {
        domino: Domino,
        end: End,
        open: Option<u8>,
    },

    /// Unexpected fault while searching a position.
    #[error("analysis failed: {0}")]
    AnalysisFailure(String),
}
