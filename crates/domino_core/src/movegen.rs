//! Legal move generation.
//!
//! Moves are emitted hand-order first, then drop-zone order, so the
//! sequence is stable for a given hand and board. Search relies on this for
//! reproducible pruning and tie-breaks.

use crate::board::{Board, DropZone};
use crate::types::{Domino, End, Move, Orientation};

/// Fill `moves` with every legal play of `hand` against `zones`, or a single
/// `Pass` when nothing fits (including the empty-hand case).
pub fn legal_moves_into(hand: &[Domino], zones: &[DropZone], moves: &mut Vec<Move>) {
    moves.clear();
    for &domino in hand {
        for zone in zones {
            if domino.low() == zone.value {
                moves.push(Move::play(domino, zone.position, Orientation::Normal));
            }
            if domino.high() == zone.value && !domino.is_double() {
                moves.push(Move::play(domino, zone.position, Orientation::Flipped));
            }
        }
    }
    if moves.is_empty() {
        moves.push(Move::Pass);
    }
}

pub fn legal_moves(hand: &[Domino], zones: &[DropZone]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(hand.len() * zones.len().max(1));
    legal_moves_into(hand, zones, &mut moves);
    moves
}

/// Moves for `hand` on `board`. Any domino may lead on an empty board; such
/// plays are tagged `Right`/`Normal` and seed the chain when applied.
pub fn board_moves_into(board: &Board, hand: &[Domino], moves: &mut Vec<Move>) {
    if board.is_empty() && !hand.is_empty() {
        moves.clear();
        moves.extend(
            hand.iter()
                .map(|&domino| Move::play(domino, End::Right, Orientation::Normal)),
        );
        return;
    }
    legal_moves_into(hand, &board.drop_zones(), moves);
}

pub fn board_moves(board: &Board, hand: &[Domino]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(16);
    board_moves_into(board, hand, &mut moves);
    moves
}

/// True when at least one domino in `hand` fits one of `zones`.
pub fn has_play(hand: &[Domino], zones: &[DropZone]) -> bool {
    hand.iter()
        .any(|d| zones.iter().any(|zone| d.has(zone.value)))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
