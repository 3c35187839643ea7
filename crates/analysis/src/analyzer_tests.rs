use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use domino_core::{Board, Domino, DominoError, End, Move, Orientation, SearchOutcome, Variant};

fn d(a: u8, b: u8) -> Domino {
    Domino::new(a, b).unwrap()
}

fn spinner_state(hand: Vec<Domino>, variant: Variant) -> GameState {
    let mut board = Board::new();
    board.add_first(d(6, 6)).unwrap();
    GameState::new(board, hand, variant)
}

#[derive(Debug, Default)]
struct FailingEngine;

impl Engine for FailingEngine {
    fn search(&mut self, _state: &GameState, _depth: u8) -> Result<SearchOutcome, DominoError> {
        Err(DominoError::AnalysisFailure("engine offline".into()))
    }

    fn name(&self) -> &str {
        "Failing"
    }
}

static COUNTED_SEARCHES: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Default)]
struct CountingEngine;

impl Engine for CountingEngine {
    fn search(&mut self, _state: &GameState, depth: u8) -> Result<SearchOutcome, DominoError> {
        COUNTED_SEARCHES.fetch_add(1, Ordering::SeqCst);
        Ok(SearchOutcome {
            best_move: Some(Move::Pass),
            score: 0,
            depth,
            nodes: 1,
        })
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

#[test]
fn test_single_domino_recommendation() {
    let analyzer = Analyzer::new();
    let state = spinner_state(vec![d(6, 2)], Variant::Block);

    let result = analyzer.analyze(&state, Tier::Free);
    assert_eq!(
        result.best_move,
        Some(Move::play(d(2, 6), End::Left, Orientation::Flipped))
    );
    assert_eq!(result.evaluation, minimax_engine::WIN_SCORE);
    assert_eq!(result.win_probability, 100);
    assert_eq!(result.depth, 2);
    assert!(!result.from_cache);
    assert_eq!(result.suggestions[0].title, "Play 2-6");
    assert_eq!(result.suggestions[1].title, "Shed Your Hand");
}

#[test]
fn test_second_call_is_cache_hit() {
    let analyzer = Analyzer::new();
    let state = spinner_state(vec![d(6, 2), d(1, 3)], Variant::Fives);

    let first = analyzer.analyze(&state, Tier::Basic);
    let second = analyzer.analyze(&state, Tier::Basic);

    assert!(!first.from_cache);
    assert!(second.from_cache);
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.evaluation, second.evaluation);
    assert_eq!(analyzer.cache().len(), 1);
}

#[test]
fn test_cache_skips_repeat_search() {
    let analyzer: Analyzer<CountingEngine> = Analyzer::with_config(AnalysisConfig::default());
    let state = spinner_state(vec![d(1, 2)], Variant::Draw);

    analyzer.analyze(&state, Tier::Pro);
    analyzer.analyze(&state, Tier::Pro);
    assert_eq!(COUNTED_SEARCHES.load(Ordering::SeqCst), 1);

    // A different tier is a different key.
    let other = analyzer.analyze(&state, Tier::Free);
    assert!(!other.from_cache);
    assert_eq!(COUNTED_SEARCHES.load(Ordering::SeqCst), 2);
}

#[test]
fn test_engine_failure_degrades_to_default() {
    let analyzer: Analyzer<FailingEngine> = Analyzer::with_config(AnalysisConfig::default());
    let state = spinner_state(vec![d(6, 2)], Variant::Fives);

    let result = analyzer.analyze(&state, Tier::Pro);
    assert_eq!(result, AnalysisResult::unavailable());
    assert_eq!(result.suggestions[0].title, "Analysis Unavailable");
    assert!(analyzer.cache().is_empty());
}

#[test]
fn test_unknown_tier_uses_shallowest_depth() {
    let analyzer = Analyzer::new();
    let state = spinner_state(vec![d(6, 2), d(4, 5)], Variant::Fives);

    let result = analyzer.analyze_named(&state, "platinum");
    assert_eq!(result.depth, analyzer.depth_for(Tier::Free));
    assert_eq!(analyzer.analyze_named(&state, "PRO").depth, 10);
}

#[test]
fn test_configured_depths_are_used() {
    let mut config = AnalysisConfig::default();
    config.tiers.free = 1;
    config.tiers.basic = 3;
    config.tiers.pro = 4;
    let analyzer: Analyzer = Analyzer::with_config(config);
    let state = spinner_state(vec![d(6, 2), d(0, 0)], Variant::Block);

    assert_eq!(analyzer.analyze(&state, Tier::Basic).depth, 3);
}

#[test]
fn test_blocked_hand_recommends_pass() {
    let analyzer = Analyzer::new();
    let state = spinner_state(vec![d(1, 2)], Variant::Fives);

    let result = analyzer.analyze(&state, Tier::Free);
    assert_eq!(result.best_move, Some(Move::Pass));
    assert_eq!(result.suggestions[0].title, "Pass");
    assert_eq!(result.suggestions[0].confidence, 100.0);
}

#[test]
fn test_duplicated_domino_is_unavailable() {
    let analyzer = Analyzer::new();
    let mut board = Board::new();
    board.add_first(d(6, 6)).unwrap();
    board.place(d(2, 6), End::Left).unwrap();
    let state = GameState::new(board, vec![d(2, 6)], Variant::Fives);

    assert_eq!(analyzer.analyze(&state, Tier::Free), AnalysisResult::unavailable());
    assert!(analyzer.cache().is_empty());
}

#[test]
fn test_repeated_hand_domino_is_unavailable() {
    let analyzer = Analyzer::new();
    let state = spinner_state(vec![d(6, 1), d(6, 1), d(6, 1)], Variant::Fives);

    let result = analyzer.analyze(&state, Tier::Basic);
    assert!(result.is_unavailable());
    assert_eq!(result.evaluation, 0);
}
