use tracing::{debug, info};

use super::{MoveOutcome, MoveSource, Session, SessionEvent, SessionInner, SessionPhase};
use crate::domain::game_transition::{derive_transitions, GameTransition, TurnView};
use crate::domain::{Move, Seat};
use crate::error::AppError;

impl Session {
    /// Apply `mv` for `seat` and carry the state machine on to the next
    /// dispatch. The caller holds the session lock and has checked the phase.
    ///
    /// A rejected move leaves the game, the phase, and the pending job as
    /// they were.
    pub(super) fn apply_locked(
        &self,
        inner: &mut SessionInner,
        seat: Seat,
        mv: Move,
        source: MoveSource,
    ) -> Result<MoveOutcome, AppError> {
        let before = TurnView::from(&inner.game);
        let result = inner.game.play_move(seat, &mv)?;

        inner.cancel_pending();
        inner.epoch += 1;
        inner.game.next_turn();
        inner.phase = SessionPhase::TurnResolved;
        let after = TurnView::from(&inner.game);

        debug!(
            room_id = %self.room_id,
            seat,
            card = %result.card,
            captured = result.captured.len(),
            ?source,
            epoch = inner.epoch,
            "Move accepted"
        );

        self.emit(SessionEvent::CardPlayed {
            seat,
            card: result.card,
            captured: result.captured.clone(),
            is_chkobba: result.is_chkobba,
            is_haya: result.is_haya,
            new_cards_dealt: result.new_cards_dealt,
            source,
        });
        if let Some(summary) = &result.round_end {
            self.emit(SessionEvent::RoundEnded(summary.clone()));
        }

        for transition in derive_transitions(&before, &after) {
            match transition {
                GameTransition::RoundStarted { round_no } => {
                    debug!(room_id = %self.room_id, round_no, "Next round dealt");
                }
                GameTransition::TurnBecame { seat } => {
                    self.emit(SessionEvent::TurnChanged {
                        seat,
                        round_no: after.round_no,
                    });
                }
                GameTransition::GameEnded { winner } => {
                    let scores: Vec<u32> = inner.game.players.iter().map(|p| p.score).collect();
                    info!(room_id = %self.room_id, ?winner, ?scores, "Game over");
                    if let Some(winner) = winner {
                        self.emit(SessionEvent::GameOver { winner, scores });
                    }
                }
            }
        }

        let next = self.advance_locked(inner);
        Ok(MoveOutcome {
            seat,
            card: result.card,
            captured: result.captured,
            is_chkobba: result.is_chkobba,
            is_haya: result.is_haya,
            new_cards_dealt: result.new_cards_dealt,
            round_end: result.round_end,
            next,
            source,
        })
    }
}
