//! Random Move Domino Engine
//!
//! Selects uniformly among the legal moves of a position. Useful for:
//! - Rolling out varied but legal positions (synthetic training data)
//! - Baseline comparisons (any real engine should easily beat this)

use domino_core::{DominoError, Engine, GameState, SearchOutcome};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A domino engine that plays random legal moves.
///
/// Seeded engines replay the same choices for the same positions.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    nodes: u64,
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, state: &GameState, _depth: u8) -> Result<SearchOutcome, DominoError> {
        if state.is_game_over() {
            return Ok(SearchOutcome {
                best_move: None,
                score: 0,
                depth: 0,
                nodes: 0,
            });
        }

        let moves = state.legal_moves();
        self.nodes = 1;

        Ok(SearchOutcome {
            best_move: moves.choose(&mut self.rng).copied(),
            score: 0,
            depth: 1,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
