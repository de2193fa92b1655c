//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::RoundSummary;
use crate::domain::state::{GameState, MoveRecord, Seat};
use crate::domain::Card;

/// Per-seat view. `hand` is `None` once redacted for another viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub seat: Seat,
    pub hand: Option<Vec<Card>>,
    pub hand_size: usize,
    pub score: u32,
    pub chkobba_count: u32,
    /// Cards captured this round.
    pub captured_count: usize,
    pub captured_total: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub round_no: u32,
    pub num_players: u8,
    pub target_score: u16,
    pub current_player: Seat,
    pub table: Vec<Card>,
    pub deck_remaining: usize,
    pub seats: Vec<SeatSnapshot>,
    pub is_finished: bool,
    pub winner: Option<Seat>,
    pub last_move: Option<MoveRecord>,
    pub previous_round: Option<RoundSummary>,
}

impl GameSnapshot {
    /// Full state; every hand is revealed.
    pub fn from_state(state: &GameState) -> Self {
        let seats = state
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| SeatSnapshot {
                seat: i as Seat,
                hand: Some(p.hand.clone()),
                hand_size: p.hand.len(),
                score: p.score,
                chkobba_count: p.chkobba_count,
                captured_count: p.round_captures.len(),
                captured_total: p.captured_total.len(),
            })
            .collect();

        Self {
            round_no: state.round_no,
            num_players: state.num_players,
            target_score: state.target_score,
            current_player: state.current_player,
            table: state.table.clone(),
            deck_remaining: state.deck.remaining(),
            seats,
            is_finished: state.is_finished,
            winner: state.winner,
            last_move: state.move_log.last().cloned(),
            previous_round: state.previous_round.clone(),
        }
    }

    /// Copy with every hand except `viewer`'s reduced to its size.
    pub fn for_viewer(&self, viewer: Seat) -> Self {
        let mut redacted = self.clone();
        for seat in redacted.seats.iter_mut().filter(|s| s.seat != viewer) {
            seat.hand = None;
        }
        redacted
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(self)
    }
}
