use crate::domain::captures::{find_captures, Move};
use crate::domain::test_state_helpers::{card, cards, state_with};
use crate::errors::domain::ValidationKind;

fn kind_of(err: crate::errors::domain::DomainError) -> ValidationKind {
    err.validation_kind().cloned().expect("validation error")
}

#[test]
fn single_match_suppresses_combinations() {
    // Table values 3, 4, 1 and a 4 played: only the single 4 may be taken.
    let table = cards(&["3H", "4S", "AC"]);
    let sets = find_captures(card("4D"), &table);
    assert_eq!(sets, vec![cards(&["4S"])]);
}

#[test]
fn combo_rejected_when_single_match_exists() {
    let state = state_with(&[&["4D", "KS"], &["2C"]], &["3H", "4S", "AC"]);
    let err = state
        .validate_play(0, card("4D"), &cards(&["3H", "AC"]))
        .unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::ComboNotAllowed);

    assert!(state.validate_play(0, card("4D"), &cards(&["4S"])).is_ok());
}

#[test]
fn combinations_listed_by_size_then_table_order() {
    let table = cards(&["AH", "2S", "3C", "4D"]);
    let sets = find_captures(card("6H"), &table);
    assert_eq!(sets, vec![cards(&["2S", "4D"]), cards(&["AH", "2S", "3C"])]);
}

#[test]
fn every_single_match_is_listed() {
    let table = cards(&["5H", "2S", "5C"]);
    let sets = find_captures(card("5D"), &table);
    assert_eq!(sets, vec![cards(&["5H"]), cards(&["5C"])]);
}

#[test]
fn nothing_to_capture_on_empty_or_high_table() {
    assert!(find_captures(card("KH"), &[]).is_empty());
    assert!(find_captures(card("AH"), &cards(&["2S", "KD"])).is_empty());
}

#[test]
fn capture_is_mandatory_when_every_card_can_capture() {
    let state = state_with(&[&["4D", "3S"], &["2C"]], &["4H", "3C", "KS"]);
    let err = state.validate_play(0, card("4D"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CaptureMandatory);
    let err = state.validate_play(0, card("3S"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CaptureMandatory);
}

#[test]
fn declining_allowed_while_holding_a_non_capturing_card() {
    let state = state_with(&[&["4D", "6S"], &["2C"]], &["4H", "KS", "QC"]);
    // 6S cannot capture anything here.
    assert!(state.validate_play(0, card("6S"), &[]).is_ok());
    // Holding 6S also lets 4D be placed without taking the 4.
    assert!(state.validate_play(0, card("4D"), &[]).is_ok());
}

#[test]
fn turn_and_hand_checks_come_first() {
    let state = state_with(&[&["4D"], &["2C"]], &["4H"]);
    let err = state.validate_play(1, card("2C"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::NotPlayersTurn);

    let err = state.validate_play(0, card("5D"), &[]).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CardNotInHand);
}

#[test]
fn capture_cards_must_be_on_table_and_sum() {
    let state = state_with(&[&["4D", "KH"], &["2C"]], &["2H", "3S", "KC"]);
    let err = state
        .validate_play(0, card("4D"), &cards(&["AS"]))
        .unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CardNotOnTable);

    let err = state
        .validate_play(0, card("4D"), &cards(&["3S"]))
        .unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CaptureSumMismatch);
}

#[test]
fn repeated_card_in_capture_set_is_not_a_combination() {
    let state = state_with(&[&["4D", "KH"], &["2C"]], &["2H", "3S", "QC"]);
    let err = state
        .validate_play(0, card("4D"), &cards(&["2H", "2H"]))
        .unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::InvalidCaptureCombination);
}

#[test]
fn oversized_capture_list_is_a_sum_mismatch() {
    // 60 copies of a 6 sum far past any card value.
    let state = state_with(&[&["KH", "4D"], &["2C"]], &["6C", "2S", "QC"]);
    let captures = vec![card("6C"); 60];
    let err = state.validate_play(0, card("KH"), &captures).unwrap_err();
    assert_eq!(kind_of(err), ValidationKind::CaptureSumMismatch);
}

#[test]
fn capture_set_order_does_not_matter() {
    let state = state_with(&[&["6H", "KH"], &["2C"]], &["AH", "2S", "3C", "4D"]);
    assert!(state
        .validate_play(0, card("6H"), &cards(&["4D", "2S"]))
        .is_ok());
    assert!(state
        .validate_play(0, card("6H"), &cards(&["3C", "AH", "2S"]))
        .is_ok());
}

#[test]
fn legal_moves_list_captures_then_placements() {
    let state = state_with(&[&["4D", "6S"], &["2C"]], &["4H", "KS", "QC"]);
    let moves = state.legal_moves(0);
    assert_eq!(
        moves,
        vec![
            Move::new(card("4D"), cards(&["4H"])),
            Move::place(card("4D")),
            Move::place(card("6S")),
        ]
    );
}

#[test]
fn playable_moves_drop_refused_placements() {
    let state = state_with(&[&["4D", "3S"], &["2C"]], &["4H", "3C", "KS"]);
    let moves = state.playable_moves(0);
    assert_eq!(
        moves,
        vec![
            Move::new(card("4D"), cards(&["4H"])),
            Move::new(card("3S"), cards(&["3C"])),
        ]
    );
}

#[test]
fn fallback_places_first_card_when_allowed() {
    let state = state_with(&[&["4D", "6S"], &["2C"]], &["4H", "KS", "QC"]);
    assert_eq!(state.fallback_move(0), Some(Move::place(card("4D"))));
}

#[test]
fn fallback_captures_when_placing_is_refused() {
    let state = state_with(&[&["4D", "3S"], &["2C"]], &["4H", "3C", "KS"]);
    assert_eq!(
        state.fallback_move(0),
        Some(Move::new(card("4D"), cards(&["4H"])))
    );
}

#[test]
fn fallback_is_none_for_empty_hand_or_wrong_seat() {
    let state = state_with(&[&[], &["2C"]], &["4H"]);
    assert_eq!(state.fallback_move(0), None);
    assert_eq!(state.fallback_move(1), None);
}
