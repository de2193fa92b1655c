use serde::{Deserialize, Serialize};

use crate::domain::dealing::Deck;
use crate::domain::rules::{self, DECK_SIZE};
use crate::domain::scoring::RoundSummary;
use crate::domain::Card;
use crate::errors::domain::DomainError;

pub type Seat = u8; // 0..num_players

/// Fixed-shape per-seat record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards currently held; at most 3 between deals.
    pub hand: Vec<Card>,
    /// Captured this round; cleared at every round boundary.
    pub round_captures: Vec<Card>,
    /// Every card captured across the whole game.
    pub captured_total: Vec<Card>,
    /// Chkobbas this round.
    pub chkobba_count: u32,
    /// Cumulative score across rounds.
    pub score: u32,
}

/// One applied play. Entries are appended and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub round_no: u32,
    pub seat: Seat,
    pub card: Card,
    pub captured: Vec<Card>,
    pub is_chkobba: bool,
    pub is_haya: bool,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub num_players: u8,
    pub target_score: u16,
    /// Base seed; each round's shuffle derives from it.
    pub game_seed: u64,
    pub deck: Deck,
    pub players: Vec<PlayerState>,
    /// Face-up cards in the order they arrived.
    pub table: Vec<Card>,
    /// Seat expected to act. Rotation continues across rounds.
    pub current_player: Seat,
    /// 1-based round number.
    pub round_no: u32,
    /// Round-scoped; reset when a new round is set up.
    pub last_capturer: Option<Seat>,
    pub is_finished: bool,
    pub winner: Option<Seat>,
    pub move_log: Vec<MoveRecord>,
    /// Summary of the most recently scored round (if any).
    pub previous_round: Option<RoundSummary>,
}

impl GameState {
    /// Create a game and deal the first round.
    pub fn new(num_players: u8, target_score: u16, game_seed: u64) -> Result<Self, DomainError> {
        rules::validate_player_count(num_players)?;
        rules::validate_target_score(target_score)?;

        let mut state = Self {
            num_players,
            target_score,
            game_seed,
            deck: Deck::empty(),
            players: vec![PlayerState::default(); num_players as usize],
            table: Vec::new(),
            current_player: 0,
            round_no: 1,
            last_capturer: None,
            is_finished: false,
            winner: None,
            move_log: Vec::new(),
            previous_round: None,
        };
        state.setup_round();
        Ok(state)
    }

    /// Advance `(current + 1) mod n`; a finished game never moves on.
    pub fn next_turn(&mut self) {
        if !self.is_finished {
            self.current_player = (self.current_player + 1) % self.num_players;
        }
    }

    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }

    pub fn player(&self, seat: Seat) -> Option<&PlayerState> {
        self.players.get(seat as usize)
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.player(seat).map(|p| p.hand.as_slice()).unwrap_or(&[])
    }

    /// Hands + table + round captures + deck; 40 in every reachable state.
    pub fn card_count(&self) -> usize {
        let held: usize = self
            .players
            .iter()
            .map(|p| p.hand.len() + p.round_captures.len())
            .sum();
        held + self.table.len() + self.deck.remaining()
    }

    /// Every card currently in play, wherever it sits.
    pub fn cards_in_play(&self) -> impl Iterator<Item = Card> + '_ {
        self.players
            .iter()
            .flat_map(|p| p.hand.iter().chain(p.round_captures.iter()))
            .chain(self.table.iter())
            .chain(self.deck.cards().iter())
            .copied()
    }

    pub(crate) fn debug_check_card_count(&self) {
        debug_assert_eq!(
            self.card_count(),
            DECK_SIZE,
            "card conservation violated in round {}",
            self.round_no
        );
    }
}
