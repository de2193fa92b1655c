//! Property-based tests for capture enumeration and validation.

use proptest::prelude::*;

use crate::domain::captures::{find_captures, has_single_match};
use crate::domain::dealing::Deck;
use crate::domain::state::{GameState, PlayerState};
use crate::domain::{cards_value, test_gens, test_prelude, Card};

fn one_card_state(card: Card, table: Vec<Card>) -> GameState {
    let mut players = vec![PlayerState::default(); 2];
    players[0].hand = vec![card];
    GameState {
        num_players: 2,
        target_score: 21,
        game_seed: 0,
        deck: Deck::empty(),
        players,
        table,
        current_player: 0,
        round_no: 1,
        last_capturer: None,
        is_finished: false,
        winner: None,
        move_log: Vec::new(),
        previous_round: None,
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every enumerated set sums to the card's value and uses
    /// distinct table cards.
    #[test]
    fn prop_capture_sets_sum_to_card_value((card, table) in test_gens::card_and_table(8)) {
        for set in find_captures(card, &table) {
            prop_assert_eq!(cards_value(&set), u32::from(card.value()));
            prop_assert!(set.iter().all(|c| table.contains(c)));
            let mut dedup = set.clone();
            dedup.sort();
            dedup.dedup();
            prop_assert_eq!(dedup.len(), set.len());
        }
    }

    /// Property: a 1-to-1 match means only single-card sets.
    #[test]
    fn prop_single_match_precedence((card, table) in test_gens::card_and_table(8)) {
        let sets = find_captures(card, &table);
        if has_single_match(card, &table) {
            prop_assert!(!sets.is_empty());
            prop_assert!(sets.iter().all(|s| s.len() == 1));
        } else {
            prop_assert!(sets.iter().all(|s| s.len() >= 2));
        }
    }

    /// Property: every enumerated set validates, and a lone card that can
    /// capture may not be placed.
    #[test]
    fn prop_enumerated_sets_validate((card, table) in test_gens::card_and_table(6)) {
        let state = one_card_state(card, table);
        let sets = state.find_captures(card);
        for set in &sets {
            prop_assert!(state.validate_play(0, card, set).is_ok());
        }
        prop_assert_eq!(state.validate_play(0, card, &[]).is_ok(), sets.is_empty());
    }

    /// Property: playable moves always exist for a non-empty hand.
    #[test]
    fn prop_someone_can_always_move(
        n in test_gens::player_count(),
        seed in test_gens::game_seed(),
    ) {
        let state = GameState::new(n, 21, seed).unwrap();
        let seat = state.current_player;
        let moves = state.playable_moves(seat);
        prop_assert!(!moves.is_empty());
        prop_assert!(state.fallback_move(seat).is_some());
    }
}
