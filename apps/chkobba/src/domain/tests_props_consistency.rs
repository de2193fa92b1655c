//! Property-based tests for card conservation across whole games.
//! Random play-outs pick among the accepted moves at every turn.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::rules::DECK_SIZE;
use crate::domain::state::GameState;
use crate::domain::{test_gens, test_prelude};

/// Play up to `choices.len()` moves, checking invariants after each one.
fn play_out(state: &mut GameState, choices: &[usize]) -> Result<(), TestCaseError> {
    for pick in choices {
        if state.is_finished {
            break;
        }
        let seat = state.current_player;
        let moves = state.playable_moves(seat);
        prop_assert!(!moves.is_empty(), "seat {} has nothing to play", seat);
        let mv = &moves[pick % moves.len()];
        state
            .play_move(seat, mv)
            .map_err(|e| TestCaseError::fail(format!("accepted move refused: {e}")))?;
        state.next_turn();

        prop_assert_eq!(state.card_count(), DECK_SIZE);
        let codes: HashSet<String> = state.cards_in_play().map(|c| c.code()).collect();
        prop_assert_eq!(codes.len(), DECK_SIZE, "duplicate card in play");
    }
    Ok(())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: hands + table + captures + deck is always the full deck,
    /// with no card in two places.
    #[test]
    fn prop_cards_are_conserved(
        n in test_gens::player_count(),
        seed in test_gens::game_seed(),
        choices in test_gens::choices(120),
    ) {
        let mut state = GameState::new(n, 21, seed).unwrap();
        play_out(&mut state, &choices)?;
    }

    /// Property: the move played for a timed-out or failed seat is accepted
    /// at every turn of a random play-out.
    #[test]
    fn prop_fallback_is_always_accepted(
        n in test_gens::player_count(),
        seed in test_gens::game_seed(),
        choices in test_gens::choices(120),
    ) {
        let mut state = GameState::new(n, 21, seed).unwrap();
        for pick in &choices {
            if state.is_finished {
                break;
            }
            let seat = state.current_player;
            let fallback = state.fallback_move(seat);
            prop_assert!(fallback.is_some(), "seat {} has no fallback", seat);
            if let Some(mv) = fallback {
                prop_assert!(state.validate_play(seat, mv.card, &mv.captures).is_ok());
            }
            play_out(&mut state, std::slice::from_ref(pick))?;
        }
    }

    /// Property: scores never decrease and the round number only grows.
    #[test]
    fn prop_scores_monotonic(
        n in test_gens::player_count(),
        seed in test_gens::game_seed(),
        choices in test_gens::choices(80),
    ) {
        let mut state = GameState::new(n, 11, seed).unwrap();
        let mut last_scores: Vec<u32> = vec![0; n as usize];
        let mut last_round = state.round_no;
        for chunk in choices.chunks(10) {
            play_out(&mut state, chunk)?;
            let scores: Vec<u32> = state.players.iter().map(|p| p.score).collect();
            for (now, before) in scores.iter().zip(&last_scores) {
                prop_assert!(now >= before);
            }
            prop_assert!(state.round_no >= last_round);
            last_scores = scores;
            last_round = state.round_no;
        }
    }

    /// Property: a round closes exactly when the 40 cards run out.
    #[test]
    fn prop_round_closes_after_last_card(
        n in test_gens::player_count(),
        seed in test_gens::game_seed(),
    ) {
        let mut state = GameState::new(n, 21, seed).unwrap();
        // 36 cards are dealt to hands over a round, whatever the seat count.
        let plays_per_round = DECK_SIZE - 4;
        for i in 0..plays_per_round {
            prop_assert_eq!(state.round_no, 1);
            let seat = state.current_player;
            let moves = state.playable_moves(seat);
            let result = state
                .play_move(seat, &moves[0])
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            state.next_turn();
            prop_assert_eq!(result.round_end.is_some(), i + 1 == plays_per_round);
        }
    }
}
