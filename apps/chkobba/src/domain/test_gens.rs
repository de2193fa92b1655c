// Proptest generators for domain types.
// Cards are drawn without replacement so generated states never hold duplicates.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// A played card plus a table of up to `max_table` other distinct cards.
pub fn card_and_table(max_table: usize) -> impl Strategy<Value = (Card, Vec<Card>)> {
    prop::sample::subsequence(full_deck(), 1..=max_table + 1)
        .prop_shuffle()
        .prop_map(|mut cards| {
            let played = cards.remove(0);
            (played, cards)
        })
}

pub fn player_count() -> impl Strategy<Value = u8> {
    2u8..=4
}

pub fn game_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Index choices used to drive random play-outs.
pub fn choices(len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), len)
}
