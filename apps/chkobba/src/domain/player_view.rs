//! Player view of game state: what a seat can see at its decision point.
//!
//! [`CurrentTurnInfo`] is the interface between the engine and computer
//! players. It carries the seat's own hand, the public table and scores,
//! and the moves the rules currently accept for that seat.

use crate::domain::captures::Move;
use crate::domain::state::{GameState, Seat};
use crate::domain::Card;

/// Information visible to a seat when it is asked to play.
///
/// # For AI Developers
///
/// - **Your hand**: [`hand`](Self::hand)
/// - **Table**: [`table`](Self::table), in arrival order
/// - **Moves**: [`legal_moves()`](Self::legal_moves) lists only plays that
///   pass validation; choosing anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTurnInfo {
    pub seat: Seat,
    pub round_no: u32,
    pub hand: Vec<Card>,
    pub table: Vec<Card>,
    pub deck_remaining: usize,
    /// Cumulative scores indexed by seat.
    pub scores: Vec<u32>,
    pub target_score: u16,
    playable: Vec<Move>,
}

impl CurrentTurnInfo {
    pub fn for_seat(state: &GameState, seat: Seat) -> Self {
        Self {
            seat,
            round_no: state.round_no,
            hand: state.hand(seat).to_vec(),
            table: state.table.clone(),
            deck_remaining: state.deck.remaining(),
            scores: state.players.iter().map(|p| p.score).collect(),
            target_score: state.target_score,
            playable: state.playable_moves(seat),
        }
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.playable
    }

    /// Highest card value on the table, 0 when empty.
    pub fn max_table_value(&self) -> u8 {
        self.table.iter().map(|c| c.value()).max().unwrap_or(0)
    }

    /// True when `captures` would leave the table empty.
    pub fn clears_table(&self, captures: &[Card]) -> bool {
        !captures.is_empty() && captures.len() == self.table.len()
    }
}
