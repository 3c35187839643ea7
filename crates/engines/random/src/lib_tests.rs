use super::*;
use domino_core::{Board, Domino, Move, Variant};

fn d(a: u8, b: u8) -> Domino {
    Domino::new(a, b).unwrap()
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(1);
    let mut board = Board::new();
    board.add_first(d(6, 6)).unwrap();
    let state = GameState::new(board, vec![d(6, 1), d(6, 3), d(2, 2)], Variant::Fives);

    let result = engine.search(&state, 1).unwrap();
    let mv = result.best_move.unwrap();
    assert!(state.legal_moves().contains(&mv));
    assert!(state.apply(mv).is_ok());
}

#[test]
fn random_engine_passes_when_blocked() {
    let mut engine = RandomEngine::with_seed(2);
    let mut board = Board::new();
    board.add_first(d(6, 6)).unwrap();
    let state = GameState::new(board, vec![d(1, 2)], Variant::Block);

    let result = engine.search(&state, 1).unwrap();
    assert_eq!(result.best_move, Some(Move::Pass));
}

#[test]
fn random_engine_handles_finished_hand() {
    let mut engine = RandomEngine::new();
    let state = GameState::new(Board::new(), Vec::new(), Variant::Draw);

    let result = engine.search(&state, 1).unwrap();
    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engines_agree() {
    let state = GameState::new(
        Board::new(),
        vec![d(0, 1), d(2, 3), d(4, 5), d(6, 6)],
        Variant::Fives,
    );
    let mut a = RandomEngine::with_seed(99);
    let mut b = RandomEngine::with_seed(99);
    for _ in 0..10 {
        assert_eq!(
            a.search(&state, 1).unwrap().best_move,
            b.search(&state, 1).unwrap().best_move
        );
    }
}
