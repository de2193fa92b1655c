//! Applying a validated play to the game state.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::captures::Move;
use crate::domain::dealing::RedealOutcome;
use crate::domain::scoring::RoundSummary;
use crate::domain::state::{GameState, MoveRecord, Seat};
use crate::domain::{Card, HAYA};
use crate::errors::domain::DomainError;

/// What a single applied play did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayResult {
    pub seat: Seat,
    pub card: Card,
    pub captured: Vec<Card>,
    pub is_chkobba: bool,
    pub is_haya: bool,
    pub new_cards_dealt: bool,
    /// Present when this play closed the round.
    pub round_end: Option<RoundSummary>,
}

impl GameState {
    /// Validate, then apply.
    pub fn play_card(
        &mut self,
        seat: Seat,
        card: Card,
        captures: &[Card],
    ) -> Result<PlayResult, DomainError> {
        self.validate_play(seat, card, captures)?;
        Ok(self.apply_play(seat, card, captures))
    }

    pub fn play_move(&mut self, seat: Seat, mv: &Move) -> Result<PlayResult, DomainError> {
        self.play_card(seat, mv.card, &mv.captures)
    }

    /// Apply an already-validated play. The capturing card joins the seat's
    /// pile together with what it took; a plain placement joins the table.
    pub fn apply_play(&mut self, seat: Seat, card: Card, captures: &[Card]) -> PlayResult {
        let idx = seat as usize;
        if let Some(pos) = self.players[idx].hand.iter().position(|c| *c == card) {
            self.players[idx].hand.remove(pos);
        }

        let captured: Vec<Card> = captures.to_vec();
        if captured.is_empty() {
            self.table.push(card);
        } else {
            self.table.retain(|t| !captured.contains(t));
            let player = &mut self.players[idx];
            player.round_captures.push(card);
            player.round_captures.extend(captured.iter().copied());
            player.captured_total.push(card);
            player.captured_total.extend(captured.iter().copied());
            self.last_capturer = Some(seat);
        }

        let is_chkobba = !captured.is_empty() && self.table.is_empty();
        let is_haya = captured.contains(&HAYA);
        if is_chkobba {
            self.players[idx].chkobba_count += 1;
            info!(
                round_no = self.round_no,
                seat,
                card = %card,
                chkobbas = self.players[idx].chkobba_count,
                "Chkobba"
            );
        }

        debug!(
            round_no = self.round_no,
            seat,
            card = %card,
            captured = ?captured.iter().map(|c| c.code()).collect::<Vec<_>>(),
            is_haya,
            "Play applied"
        );

        self.move_log.push(MoveRecord {
            round_no: self.round_no,
            seat,
            card,
            captured: captured.clone(),
            is_chkobba,
            is_haya,
        });

        let mut new_cards_dealt = false;
        let mut round_end = None;
        match self.check_and_redeal() {
            RedealOutcome::NoOp => {}
            RedealOutcome::Redealt => new_cards_dealt = true,
            RedealOutcome::RoundOver => round_end = Some(self.end_round()),
        }
        self.debug_check_card_count();

        PlayResult {
            seat,
            card,
            captured,
            is_chkobba,
            is_haya,
            new_cards_dealt,
            round_end,
        }
    }
}
