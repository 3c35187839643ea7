use super::*;

fn d(a: u8, b: u8) -> Domino {
    Domino::new(a, b).unwrap()
}

fn zone(position: End, value: u8) -> DropZone {
    DropZone { position, value }
}

#[test]
fn test_empty_hand_passes() {
    let moves = legal_moves(&[], &[zone(End::Left, 3)]);
    assert_eq!(moves, vec![Move::Pass]);
}

#[test]
fn test_no_match_passes() {
    let hand = [d(1, 2), d(4, 5)];
    let zones = [zone(End::Left, 6), zone(End::Right, 3)];
    let moves = legal_moves(&hand, &zones);
    assert_eq!(moves, vec![Move::Pass]);
    assert!(!has_play(&hand, &zones));
}

#[test]
fn test_orientation_follows_matching_pip() {
    let hand = [d(2, 6)];
    let zones = [zone(End::Left, 2), zone(End::Right, 6)];
    let moves = legal_moves(&hand, &zones);
    assert_eq!(
        moves,
        vec![
            Move::play(d(2, 6), End::Left, Orientation::Normal),
            Move::play(d(2, 6), End::Right, Orientation::Flipped),
        ]
    );
}

#[test]
fn test_double_yields_one_move_per_zone() {
    let hand = [d(6, 6)];
    let zones = [
        zone(End::Left, 6),
        zone(End::Right, 6),
        zone(End::Top, 6),
        zone(End::Bottom, 1),
    ];
    let moves = legal_moves(&hand, &zones);
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|m| matches!(
        m,
        Move::Play { orientation: Orientation::Normal, .. }
    )));
}

#[test]
fn test_move_order_is_hand_then_zone() {
    let hand = [d(3, 4), d(1, 3)];
    let zones = [zone(End::Left, 3), zone(End::Right, 4)];
    let moves = legal_moves(&hand, &zones);
    assert_eq!(
        moves,
        vec![
            Move::play(d(3, 4), End::Left, Orientation::Normal),
            Move::play(d(3, 4), End::Right, Orientation::Flipped),
            Move::play(d(1, 3), End::Left, Orientation::Flipped),
        ]
    );
    assert_eq!(moves, legal_moves(&hand, &zones));
}

#[test]
fn test_empty_board_allows_any_lead() {
    let board = Board::new();
    let hand = [d(0, 1), d(5, 5)];
    let moves = board_moves(&board, &hand);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| !m.is_pass()));
}

#[test]
fn test_board_moves_use_spinner_arms() {
    let mut board = Board::new();
    board.add_first(d(5, 5)).unwrap();
    let moves = board_moves(&board, &[d(5, 0)]);
    // left, right, top, bottom
    assert_eq!(moves.len(), 4);
    assert!(moves.contains(&Move::play(d(0, 5), End::Bottom, Orientation::Flipped)));
}
