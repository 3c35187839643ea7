use super::*;
use domino_core::End;

fn d(a: u8, b: u8) -> Domino {
    Domino::new(a, b).unwrap()
}

#[test]
fn test_empty_hand_is_a_win_regardless_of_board() {
    let empty = GameState::new(Board::new(), Vec::new(), Variant::Fives);
    assert_eq!(evaluate(&empty), WIN_SCORE);

    let board = Board::replay(&[(d(6, 6), End::Right), (d(6, 1), End::Left)]).unwrap();
    let busy = GameState::new(board, Vec::new(), Variant::Block).with_scores(0, 90);
    assert_eq!(evaluate(&busy), WIN_SCORE);
}

#[test]
fn test_hand_strength_counts_pips_and_doubles() {
    assert_eq!(hand_strength(&[d(1, 2), d(3, 3)]), 3 + 6 + DOUBLE_BONUS);
    assert_eq!(hand_strength(&[]), 0);
}

#[test]
fn test_fives_evaluation_terms() {
    // Ends 5 + 5 + 5 + 5 = 20, a scoring position.
    let mut board = Board::new();
    board.add_first(d(5, 5)).unwrap();
    let state = GameState::new(board, vec![d(1, 2)], Variant::Fives).with_scores(30, 10);

    let expected = 3 + BOARD_CONTROL_PER_DOMINO + 20 + 20;
    assert_eq!(evaluate(&state), expected);
}

#[test]
fn test_blocking_variant_penalizes_hand_size() {
    let mut board = Board::new();
    board.add_first(d(5, 5)).unwrap();
    let state = GameState::new(board, vec![d(0, 1), d(0, 2)], Variant::Draw).with_scores(50, 0);

    // No scoring potential or score differential outside All Fives.
    let expected = 1 + 2 + BOARD_CONTROL_PER_DOMINO - 2 * HAND_SIZE_PENALTY;
    assert_eq!(evaluate(&state), expected);
}

#[test]
fn test_non_scoring_ends_get_no_potential() {
    let board = Board::replay(&[(d(2, 4), End::Right)]).unwrap();
    let state = GameState::new(board, vec![d(6, 6)], Variant::Fives);
    assert_eq!(scoring_potential(&state), 0);
}
