//! Position Analysis for domino games
//!
//! This crate provides:
//! - Tiered analysis (free / basic / pro search depths)
//! - A bounded, time-limited position cache shared across calls
//! - Win-probability estimates and ranked, human-readable suggestions
//! - Synthetic training positions for offline study
//!
//! # Usage
//!
//! ```no_run
//! use analysis::{Analyzer, Tier};
//! use domino_core::{Board, Domino, GameState, Variant};
//!
//! let mut board = Board::new();
//! board.seed(Domino::new(6, 6).unwrap()).unwrap();
//! let state = GameState::new(board, vec![Domino::new(2, 6).unwrap()], Variant::Fives);
//!
//! let analyzer = Analyzer::new();
//! let result = analyzer.analyze(&state, Tier::Basic);
//! println!("{:?} ({}%)", result.best_move, result.win_probability);
//! ```

mod analyzer;
mod cache;
mod config;
mod result;
mod training;

pub use analyzer::*;
pub use cache::*;
pub use config::*;
pub use result::*;
pub use training::*;
