use std::collections::HashSet;

use crate::board::Board;
use crate::error::DominoError;
use crate::movegen::board_moves_into;
use crate::types::{Domino, Move, Variant};

/// Snapshot of a position from the point of view of the player holding
/// `hand`.
///
/// Treated as a value: search never mutates a state it was handed, it
/// derives a fresh one per simulated move with [`GameState::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub hand: Vec<Domino>,
    pub variant: Variant,
    pub your_score: i32,
    pub opponent_score: i32,
    pub passes: u32,
    pub draws: u32,
}

impl GameState {
    pub fn new(board: Board, hand: Vec<Domino>, variant: Variant) -> Self {
        Self {
            board,
            hand,
            variant,
            ..Default::default()
        }
    }

    pub fn with_scores(mut self, your_score: i32, opponent_score: i32) -> Self {
        self.your_score = your_score;
        self.opponent_score = opponent_score;
        self
    }

    pub fn with_counters(mut self, passes: u32, draws: u32) -> Self {
        self.passes = passes;
        self.draws = draws;
        self
    }

    /// The game ends for this hand once it is empty.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn legal_moves_into(&self, moves: &mut Vec<Move>) {
        board_moves_into(&self.board, &self.hand, moves);
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(16);
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Checks that no domino appears twice across the board and the hand.
    /// A snapshot failing this cannot come from a real game.
    pub fn validate(&self) -> Result<(), DominoError> {
        let mut seen = HashSet::with_capacity(28);
        let board = self.board.dominoes();
        for (d, place) in board
            .iter()
            .map(|&d| (d, "board"))
            .chain(self.hand.iter().map(|&d| (d, "hand")))
        {
            if !seen.insert(d) {
                return Err(DominoError::AnalysisFailure(format!(
                    "{d} appears more than once (again in {place})"
                )));
            }
        }
        Ok(())
    }

    /// Returns the state reached by playing `mv`; `self` is left untouched.
    pub fn apply(&self, mv: Move) -> Result<GameState, DominoError> {
        let mut next = self.clone();
        match mv {
            Move::Play { domino, end, .. } => {
                let idx = next
                    .hand
                    .iter()
                    .position(|&d| d == domino)
                    .ok_or_else(|| {
                        DominoError::InvalidState(format!("{domino} is not in hand"))
                    })?;
                if next.board.is_empty() {
                    next.board.seed(domino)?;
                } else {
                    next.board.extend(domino, end)?;
                }
                next.hand.remove(idx);
            }
            Move::Pass => next.passes += 1,
        }
        Ok(next)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
