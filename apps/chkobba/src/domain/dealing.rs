//! Deck model and deterministic dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::domain::rules::{redeal_size, DECK_SIZE, HAND_SIZE, TABLE_DEAL};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::GameState;
use crate::domain::{Card, Rank, Suit};

/// Generate the 40-card deck in suit-then-rank order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// Owned draw pile. Cards leave from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck permuted by a seeded ChaCha stream.
    pub fn shuffled(seed: u64) -> Self {
        let mut cards = full_deck();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Deck with a fixed order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Remove up to `n` cards from the end. Returns fewer when the deck runs
    /// out; callers check the length.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut drawn = Vec::with_capacity(take);
        for _ in 0..take {
            if let Some(card) = self.cards.pop() {
                drawn.push(card);
            }
        }
        drawn
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Result of the post-play deal check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedealOutcome {
    /// Someone still holds cards.
    NoOp,
    /// Every seat received a fresh hand.
    Redealt,
    /// Hands and deck are exhausted; the round must be scored.
    RoundOver,
}

impl GameState {
    /// Shuffle a fresh deck for the current round, deal 3 cards per seat in
    /// seat order, then 4 face-up to the table.
    pub fn setup_round(&mut self) {
        self.deck = Deck::shuffled(derive_dealing_seed(self.game_seed, self.round_no));
        for player in self.players.iter_mut() {
            player.hand = self.deck.draw(HAND_SIZE);
        }
        self.table = self.deck.draw(TABLE_DEAL);
        debug!(
            round_no = self.round_no,
            table = ?self.table.iter().map(|c| c.code()).collect::<Vec<_>>(),
            deck_remaining = self.deck.remaining(),
            "Round set up"
        );
    }

    /// Deal fresh hands once every hand is empty. A no-op while any seat
    /// still holds a card. The table is never touched.
    pub fn check_and_redeal(&mut self) -> RedealOutcome {
        if !self.all_hands_empty() {
            return RedealOutcome::NoOp;
        }
        let needed = redeal_size(self.num_players);
        let remaining = self.deck.remaining();
        if remaining >= needed {
            for player in self.players.iter_mut() {
                player.hand = self.deck.draw(HAND_SIZE);
            }
            debug!(
                round_no = self.round_no,
                deck_remaining = self.deck.remaining(),
                "Dealt new hands"
            );
            return RedealOutcome::Redealt;
        }
        if remaining > 0 {
            // Unreachable with a 40-card deck and 2..=4 seats.
            warn!(
                round_no = self.round_no,
                deck_remaining = remaining,
                needed,
                "Deck cannot cover a full deal; ending round"
            );
        }
        RedealOutcome::RoundOver
    }
}
