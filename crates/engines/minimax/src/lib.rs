//! Minimax Domino Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over the core move generator,
//! scored by a hand-authored evaluator. No iterative deepening and no time
//! cutoff: a search always runs to its depth or to the end of the hand.

mod eval;
mod search;

use std::time::Instant;

use domino_core::{DominoError, Engine, GameState, SearchOutcome};
use tracing::debug;

/// Domino engine using minimax with alpha-beta pruning.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &GameState, depth: u8) -> Result<SearchOutcome, DominoError> {
        state.validate()?;
        self.nodes = 0;
        let started = Instant::now();

        let outcome = search::pick_best_move(state, depth, &mut self.nodes)?;

        debug!(
            depth,
            nodes = outcome.nodes,
            score = outcome.score,
            elapsed_us = started.elapsed().as_micros() as u64,
            "minimax search finished"
        );
        Ok(outcome)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, LOSS_SCORE, WIN_SCORE};
pub use search::{minimax, pick_best_move, SearchNode};
