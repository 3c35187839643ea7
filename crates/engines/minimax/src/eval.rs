//! Hand-authored position evaluator.
//!
//! Scores are from the perspective of the player holding the hand. The
//! weights are heuristic and kept fixed for reproducibility; the
//! board-control term in particular is a flat linear function of board size
//! with no claim to optimal play.

use domino_core::{Board, Domino, GameState, Variant};

/// Score of a state whose hand has been emptied.
pub const WIN_SCORE: i32 = 1000;
/// Score of a finished state that still holds dominoes.
pub const LOSS_SCORE: i32 = -1000;

const DOUBLE_BONUS: i32 = 2;
const BOARD_CONTROL_PER_DOMINO: i32 = 5;
const HAND_SIZE_PENALTY: i32 = 10;

pub fn evaluate(state: &GameState) -> i32 {
    if state.is_game_over() {
        return game_over_score(state);
    }
    hand_strength(&state.hand)
        + board_control(&state.board)
        + scoring_potential(state)
        + variant_modifier(state)
}

pub fn game_over_score(state: &GameState) -> i32 {
    if state.hand.is_empty() {
        WIN_SCORE
    } else {
        LOSS_SCORE
    }
}

/// Pip count plus a flat bonus per double.
pub fn hand_strength(hand: &[Domino]) -> i32 {
    hand.iter()
        .map(|d| d.pip_sum() as i32 + if d.is_double() { DOUBLE_BONUS } else { 0 })
        .sum()
}

pub fn board_control(board: &Board) -> i32 {
    board.len() as i32 * BOARD_CONTROL_PER_DOMINO
}

/// All Fives only: reward open ends that already sum to a multiple of five.
pub fn scoring_potential(state: &GameState) -> i32 {
    if state.variant != Variant::Fives || state.board.is_empty() {
        return 0;
    }
    let sum = state.board.score();
    if sum % 5 == 0 {
        sum as i32
    } else {
        0
    }
}

pub fn variant_modifier(state: &GameState) -> i32 {
    match state.variant {
        Variant::Fives => state.your_score - state.opponent_score,
        // Blocking games are won by going out first.
        Variant::Block | Variant::Draw => -(state.hand.len() as i32) * HAND_SIZE_PENALTY,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
