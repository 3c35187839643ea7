//! Canonical position keys for the analysis cache.
//!
//! The board is normalized to its multiset of dominoes (each stored low pip
//! first, then sorted), so the key ignores play order and layout. That
//! multiset is folded together with the mover, variant and search depth in
//! an FNV-style hash with fixed constants, giving the same key on every
//! platform.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Domino, Seat, Variant};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionKey(pub u64);

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[inline]
fn mix(mut h: u64, x: u64) -> u64 {
    h ^= x;
    h = h.wrapping_mul(FNV_PRIME);
    h
}

/// Board dominoes in canonical sorted order.
pub fn normalize_board(board: &Board) -> Vec<Domino> {
    let mut dominoes = board.dominoes();
    dominoes.sort_unstable();
    dominoes
}

pub fn position_key(board: &Board, mover: Seat, variant: Variant, depth: u8) -> PositionKey {
    let normalized = normalize_board(board);

    let mut h = FNV_OFFSET;
    h = mix(h, normalized.len() as u64);
    for d in &normalized {
        h = mix(h, ((d.low() as u64) << 3) | d.high() as u64);
    }
    // Tag the trailing fields so they cannot alias domino codes (< 64).
    h = mix(h, 0x100 + mover.idx() as u64);
    h = mix(h, 0x200 + variant.idx());
    h = mix(h, 0x400 + depth as u64);
    PositionKey(h)
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod hash_tests;
