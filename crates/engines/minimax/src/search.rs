//! Minimax search with alpha-beta pruning

use domino_core::{DominoError, GameState, Move, SearchOutcome};

use crate::eval::evaluate;

/// Score and move chosen at one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub score: i32,
    pub best_move: Option<Move>,
}

/// Searches `state` to `depth` plies, maximizing for the player to move.
///
/// # Arguments
/// * `state` - The position to search
/// * `depth` - Fixed search depth in plies
/// * `nodes` - Counter for nodes visited (for statistics)
pub fn pick_best_move(
    state: &GameState,
    depth: u8,
    nodes: &mut u64,
) -> Result<SearchOutcome, DominoError> {
    let root = minimax(state, depth, i32::MIN, i32::MAX, true, nodes)?;
    Ok(SearchOutcome {
        best_move: root.best_move,
        score: root.score,
        depth,
        nodes: *nodes,
    })
}

/// Recursive minimax with alpha-beta pruning.
///
/// Plies alternate between maximizing and minimizing. Only a strictly better
/// child replaces the current best, so among equal scores the first move in
/// generation order wins.
pub fn minimax(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> Result<SearchNode, DominoError> {
    *nodes += 1;

    if depth == 0 || state.is_game_over() {
        return Ok(SearchNode {
            score: evaluate(state),
            best_move: None,
        });
    }

    let mut moves = Vec::with_capacity(16);
    state.legal_moves_into(&mut moves);

    let mut best_move = None;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let child = state.apply(mv)?;
        let score = minimax(&child, depth - 1, alpha, beta, !maximizing, nodes)?.score;

        if maximizing {
            if score > best || best_move.is_none() {
                best = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best || best_move.is_none() {
                best = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break; // Cutoff
        }
    }

    Ok(SearchNode {
        score: best,
        best_move,
    })
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
