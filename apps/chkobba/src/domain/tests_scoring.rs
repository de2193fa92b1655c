use crate::domain::dealing::full_deck;
use crate::domain::scoring::{pick_winner, score_round};
use crate::domain::state::PlayerState;
use crate::domain::test_state_helpers::{card, cards, final_deal_state};
use crate::domain::{Card, Suit, DINARI, HAYA};

/// Pile of `total` cards holding exactly `diamonds` diamonds, optionally
/// including the haya, never the dinari.
fn pile(total: usize, diamonds: usize, with_haya: bool) -> Vec<Card> {
    let mut out: Vec<Card> = Vec::new();
    if with_haya {
        out.push(HAYA);
    }
    out.extend(
        full_deck()
            .into_iter()
            .filter(|c| c.suit == Suit::Diamonds && *c != HAYA)
            .take(diamonds - out.len()),
    );
    out.extend(
        full_deck()
            .into_iter()
            .filter(|c| c.suit != Suit::Diamonds && *c != DINARI)
            .take(total - out.len()),
    );
    assert_eq!(out.len(), total);
    out
}

fn player(round_captures: Vec<Card>, chkobba_count: u32, score: u32) -> PlayerState {
    PlayerState {
        round_captures,
        chkobba_count,
        score,
        ..PlayerState::default()
    }
}

#[test]
fn two_player_round_breakdown() {
    let players = vec![
        player(pile(21, 5, true), 0, 0),
        player(pile(19, 3, false), 1, 0),
    ];
    let rows = score_round(&players);

    assert!(rows[0].most_cards);
    assert!(rows[0].most_diamonds);
    assert!(rows[0].haya);
    assert!(!rows[0].dinari);
    assert_eq!(rows[0].round_points, 3);

    assert!(!rows[1].most_cards);
    assert_eq!(rows[1].chkobbas, 1);
    assert_eq!(rows[1].round_points, 1);
}

#[test]
fn tie_on_cards_awards_nobody() {
    let players = vec![
        player(pile(22, 2, false), 0, 0),
        player(pile(22, 1, false), 0, 0),
    ];
    let rows = score_round(&players);
    assert!(!rows[0].most_cards && !rows[1].most_cards);
    assert!(rows[0].most_diamonds);
}

#[test]
fn most_cards_needs_twenty_one() {
    let players = vec![
        player(pile(20, 0, false), 0, 0),
        player(pile(10, 0, false), 0, 0),
        player(pile(10, 0, false), 0, 0),
    ];
    let rows = score_round(&players);
    assert!(rows.iter().all(|r| !r.most_cards));
    // No diamonds anywhere: nobody gets the diamonds point either.
    assert!(rows.iter().all(|r| !r.most_diamonds));
    assert!(rows.iter().all(|r| r.round_points == 0));
}

#[test]
fn tie_on_diamonds_awards_nobody() {
    let players = vec![
        player(pile(5, 2, false), 0, 0),
        player(pile(5, 2, false), 0, 0),
    ];
    let rows = score_round(&players);
    assert!(rows.iter().all(|r| !r.most_diamonds));
}

#[test]
fn haya_and_dinari_stack_on_one_seat() {
    let players = vec![
        player(cards(&["7D", "7C", "AS"]), 0, 0),
        player(cards(&["2S"]), 0, 0),
    ];
    let rows = score_round(&players);
    assert!(rows[0].haya && rows[0].dinari);
    // haya + dinari + most diamonds (1 vs 0)
    assert_eq!(rows[0].round_points, 3);
}

#[test]
fn chkobbas_are_uncapped_and_totals_accumulate() {
    let players = vec![player(Vec::new(), 4, 10), player(Vec::new(), 0, 3)];
    let rows = score_round(&players);
    assert_eq!(rows[0].round_points, 4);
    assert_eq!(rows[0].total_score, 14);
    assert_eq!(rows[1].total_score, 3);
}

#[test]
fn winner_tie_break_prefers_highest_then_lowest_seat() {
    assert_eq!(pick_winner(&[20, 20], 21), None);
    assert_eq!(pick_winner(&[21, 23], 21), Some(1));
    assert_eq!(pick_winner(&[22, 22, 5], 21), Some(0));
    assert_eq!(pick_winner(&[3, 12, 12], 11), Some(1));
}

#[test]
fn crossing_target_finishes_game_without_new_round() {
    let mut state = final_deal_state(&[&["3S"], &[]], &["3H", "KD"], 1);
    state.players[1].score = 20;
    let result = state.play_card(0, card("3S"), &cards(&["3H"])).unwrap();
    let summary = result.round_end.expect("round closed");

    assert!(summary.game_over);
    assert_eq!(summary.winner, Some(1));
    assert!(state.is_finished);
    assert_eq!(state.winner, Some(1));
    assert_eq!(state.players[1].score, 24);
    assert_eq!(state.round_no, 1);
    assert!(state.players.iter().all(|p| p.hand.is_empty()));
    assert_eq!(state.card_count(), 40);

    // A finished game accepts no further plays and never rotates.
    let current = state.current_player;
    state.next_turn();
    assert_eq!(state.current_player, current);
}

#[test]
fn leftovers_without_a_capturer_are_not_awarded() {
    let mut state = final_deal_state(&[&["5S"], &[]], &["KD"], 1);
    let result = state.play_card(0, card("5S"), &[]).unwrap();
    let summary = result.round_end.expect("round closed");

    assert_eq!(summary.leftover_to, None);
    assert!(summary.leftover_cards.is_empty());
    assert_eq!(summary.seats[0].cards, 0);
    // Seat 1 holds 38 cards including 9 diamonds, haya and dinari.
    assert_eq!(summary.seats[1].round_points, 4);
    assert_eq!(state.round_no, 2);
}
