//! Test-only game state builders for domain unit tests.
//!
//! Every builder conserves the 40 cards: whatever is not placed explicitly
//! goes to the deck, or to a named capture pile when the deck must be empty.

use crate::domain::dealing::{full_deck, Deck};
use crate::domain::state::{GameState, PlayerState, Seat};
use crate::domain::{try_parse_cards, Card};

/// Parse wire codes, panicking on typos.
pub fn cards(codes: &[&str]) -> Vec<Card> {
    try_parse_cards(codes).expect("valid card codes")
}

pub fn card(code: &str) -> Card {
    code.parse().expect("valid card code")
}

fn complement(used: &[Card]) -> Vec<Card> {
    full_deck().into_iter().filter(|c| !used.contains(c)).collect()
}

fn base_state(num_players: usize) -> GameState {
    GameState {
        num_players: num_players as u8,
        target_score: 21,
        game_seed: 0,
        deck: Deck::empty(),
        players: vec![PlayerState::default(); num_players],
        table: Vec::new(),
        current_player: 0,
        round_no: 1,
        last_capturer: None,
        is_finished: false,
        winner: None,
        move_log: Vec::new(),
        previous_round: None,
    }
}

/// Mid-round state: given hands and table, every other card in the deck.
pub fn state_with(hands: &[&[&str]], table: &[&str]) -> GameState {
    let mut state = base_state(hands.len());
    let mut used = Vec::new();
    for (player, hand) in state.players.iter_mut().zip(hands) {
        player.hand = cards(hand);
        used.extend(player.hand.iter().copied());
    }
    state.table = cards(table);
    used.extend(state.table.iter().copied());
    state.deck = Deck::from_cards(complement(&used));
    state
}

/// Last deal of a round: empty deck, every other card already in
/// `rest_to`'s capture pile.
pub fn final_deal_state(hands: &[&[&str]], table: &[&str], rest_to: Seat) -> GameState {
    let mut state = state_with(hands, table);
    let rest = state.deck.draw(usize::MAX);
    state.players[rest_to as usize].round_captures = rest;
    state
}
