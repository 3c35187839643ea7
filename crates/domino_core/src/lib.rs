pub mod board;
pub mod error;
pub mod hash;
pub mod movegen;
pub mod state;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::DominoError;
pub use hash::{normalize_board, position_key, PositionKey};
pub use movegen::*;
pub use state::GameState;
pub use types::*;

// =============================================================================
// Engine trait - implemented by all move-choosing engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The move chosen at the root (None only when the root is terminal or
    /// the search depth is zero)
    pub best_move: Option<Move>,
    /// Evaluation from the root player's perspective
    pub score: i32,
    /// Depth the search was run to
    pub depth: u8,
    /// Number of nodes visited
    pub nodes: u64,
}

/// Trait that all domino engines implement.
pub trait Engine: Send {
    /// Search `state` to `depth` plies.
    ///
    /// Malformed states surface as `Err`; callers that must never fail
    /// (the analysis layer) turn that into a neutral result.
    fn search(&mut self, state: &GameState, depth: u8) -> Result<SearchOutcome, DominoError>;

    /// Returns the engine's display name
    fn name(&self) -> &str;
}
