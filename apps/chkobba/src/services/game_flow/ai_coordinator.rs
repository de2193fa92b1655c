use tracing::{debug, error, info, warn};

use super::seats::SeatController;
use super::{MoveSource, Session, SessionEvent, SessionInner};
use crate::ai::AiError;
use crate::domain::{CurrentTurnInfo, Seat};

impl Session {
    /// Scheduled AI decision for `seat`, armed at `epoch`.
    ///
    /// Policy failures and rejected choices are logged and replaced by the
    /// fallback move so the game never stalls on a computer seat.
    pub(super) fn run_ai_turn(&self, seat: Seat, epoch: u64) {
        let mut inner = self.inner.lock();
        if !inner.is_current(seat, epoch) {
            debug!(room_id = %self.room_id, seat, epoch, "Ignoring stale AI decision");
            return;
        }
        // This job is the pending one.
        inner.pending = None;

        let view = CurrentTurnInfo::for_seat(&inner.game, seat);
        let decision = match inner.seats.get(seat as usize) {
            Some(SeatController::Computer { ai, .. }) => ai.choose_move(&view),
            _ => Err(AiError::Internal(format!(
                "seat {seat} has no computer controller"
            ))),
        };

        let reason = match decision {
            Ok(mv) => match self.apply_locked(&mut inner, seat, mv, MoveSource::Ai) {
                Ok(_) => return,
                Err(err) => AiError::InvalidMove(err.detail()).to_string(),
            },
            Err(err) => err.to_string(),
        };

        warn!(room_id = %self.room_id, seat, %reason, "AI decision failed; playing fallback");
        self.emit(SessionEvent::AiFallback {
            seat,
            reason,
        });
        self.play_fallback(&mut inner, seat, MoveSource::Fallback);
    }

    /// Scheduled turn timeout for a human `seat`, armed at `epoch`.
    pub(super) fn expire_turn(&self, seat: Seat, epoch: u64) {
        let mut inner = self.inner.lock();
        if !inner.is_current(seat, epoch) {
            debug!(room_id = %self.room_id, seat, epoch, "Ignoring stale turn timeout");
            return;
        }
        inner.pending = None;

        info!(room_id = %self.room_id, seat, "Turn timed out; auto-playing");
        self.emit(SessionEvent::TurnTimedOut { seat });
        self.play_fallback(&mut inner, seat, MoveSource::Timeout);
    }

    /// The seat to move always has a fallback; a failure here is a bug.
    fn play_fallback(&self, inner: &mut SessionInner, seat: Seat, source: MoveSource) {
        let result = match inner.game.fallback_move(seat) {
            Some(mv) => self
                .apply_locked(inner, seat, mv, source)
                .map(|_| ())
                .map_err(|err| err.to_string()),
            None => Err("no fallback move available".to_string()),
        };
        if let Err(reason) = &result {
            error!(room_id = %self.room_id, seat, %reason, "Fallback move failed; turn is stuck");
        }
        debug_assert!(result.is_ok(), "fallback for seat {seat} failed: {result:?}");
    }
}
