use std::collections::HashSet;

use crate::domain::dealing::RedealOutcome;
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::state_with;

#[test]
fn setup_consumes_three_per_seat_plus_four() {
    for n in 2..=4u8 {
        let state = GameState::new(n, 21, 1234).unwrap();
        assert!(state.players.iter().all(|p| p.hand.len() == 3));
        assert_eq!(state.table.len(), 4);
        assert_eq!(state.deck.remaining(), 40 - 3 * n as usize - 4);
        assert_eq!(state.card_count(), 40);
    }
}

#[test]
fn same_seed_deals_same_cards() {
    let a = GameState::new(4, 21, 77).unwrap();
    let b = GameState::new(4, 21, 77).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());

    let c = GameState::new(4, 21, 78).unwrap();
    assert_ne!(a.snapshot().table, c.snapshot().table);
}

#[test]
fn each_round_gets_a_fresh_deck() {
    let mut state = GameState::new(2, 21, 9).unwrap();
    let first = state.deck.clone();
    state.round_no = 2;
    state.setup_round();
    assert_ne!(state.deck, first);
    assert_eq!(state.card_count(), 40);
}

#[test]
fn no_duplicate_cards_after_setup() {
    let state = GameState::new(4, 21, 4242).unwrap();
    let codes: HashSet<String> = state.cards_in_play().map(|c| c.code()).collect();
    assert_eq!(codes.len(), 40);
}

#[test]
fn redeal_check_is_noop_while_hands_remain() {
    let mut state = state_with(&[&["3S"], &[]], &["3H"]);
    let before = state.snapshot();
    assert_eq!(state.check_and_redeal(), RedealOutcome::NoOp);
    assert_eq!(state.check_and_redeal(), RedealOutcome::NoOp);
    assert_eq!(state.snapshot(), before);
}

#[test]
fn redeal_when_hands_empty_and_deck_covers_it() {
    let mut state = state_with(&[&[], &[], &[]], &["3H"]);
    let remaining = state.deck.remaining();
    assert_eq!(state.check_and_redeal(), RedealOutcome::Redealt);
    assert_eq!(state.deck.remaining(), remaining - 9);
    assert_eq!(state.table.len(), 1);
}

#[test]
fn exhausted_deck_means_round_over() {
    let mut state = state_with(&[&[], &[]], &[]);
    state.deck.draw(usize::MAX);
    assert_eq!(state.check_and_redeal(), RedealOutcome::RoundOver);
}
