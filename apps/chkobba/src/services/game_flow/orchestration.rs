use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info};

use super::seats::SeatController;
use super::{
    PendingKind, PendingTask, Session, SessionConfig, SessionEvent, SessionInner, SessionPhase,
    SessionSnapshot, TurnAdvance, EVENT_CAPACITY,
};
use crate::domain::{GameState, Seat};
use crate::error::AppError;
use crate::services::scheduler::{Job, Scheduler};

impl Session {
    /// Deal the first round and dispatch seat 0's turn.
    pub fn start(
        config: SessionConfig,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Arc<Session>, AppError> {
        // An oversized seat list still fails the player-count rule.
        let num_players = u8::try_from(config.seats.len()).unwrap_or(u8::MAX);
        let game_seed = config.seed.unwrap_or_else(rand::random);
        let game = GameState::new(num_players, config.target_score, game_seed)?;

        let seats = config
            .seats
            .iter()
            .enumerate()
            .map(|(seat, seat_config)| SeatController::build(seat_config, game_seed, seat as Seat))
            .collect();

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let session = Arc::new_cyclic(|this| Session {
            room_id: config.room_id,
            timing: config.timing,
            scheduler,
            events,
            this: this.clone(),
            inner: Mutex::new(SessionInner {
                game,
                seats,
                phase: SessionPhase::TurnResolved,
                epoch: 0,
                pending: None,
            }),
        });

        info!(
            room_id = %session.room_id,
            num_players,
            target_score = config.target_score,
            game_seed,
            "Session started"
        );

        {
            let mut inner = session.inner.lock();
            session.advance_locked(&mut inner);
        }
        Ok(session)
    }

    /// Move on from `TurnResolved`; reports the awaited seat or the winner
    /// otherwise.
    pub fn advance_turn(&self) -> Result<TurnAdvance, AppError> {
        let mut inner = self.inner.lock();
        inner.ensure_open(&self.room_id)?;
        let phase = inner.phase;
        Ok(match phase {
            SessionPhase::AwaitingMove { seat } => TurnAdvance::Seat(seat),
            SessionPhase::GameOver { winner } => TurnAdvance::GameOver(winner),
            _ => self.advance_locked(&mut inner),
        })
    }

    pub(super) fn advance_locked(&self, inner: &mut SessionInner) -> TurnAdvance {
        inner.cancel_pending();
        if let Some(winner) = inner.game.winner {
            inner.phase = SessionPhase::GameOver { winner };
            return TurnAdvance::GameOver(winner);
        }
        let seat = inner.game.current_player;
        inner.phase = SessionPhase::AwaitingMove { seat };
        self.dispatch_locked(inner, seat);
        TurnAdvance::Seat(seat)
    }

    /// Arm the single pending job for `seat`: an AI decision for computer
    /// seats, a turn timeout for humans.
    fn dispatch_locked(&self, inner: &mut SessionInner, seat: Seat) {
        let epoch = inner.epoch;
        let is_computer = inner
            .seats
            .get(seat as usize)
            .is_some_and(SeatController::is_computer);
        let (kind, delay) = if is_computer {
            (PendingKind::AiDecision, self.timing.ai_think_delay)
        } else {
            (PendingKind::HumanTimeout, self.timing.human_timeout)
        };

        let this = self.this.clone();
        let job: Job = match kind {
            PendingKind::AiDecision => Box::new(move || {
                if let Some(session) = this.upgrade() {
                    session.run_ai_turn(seat, epoch);
                }
            }),
            PendingKind::HumanTimeout => Box::new(move || {
                if let Some(session) = this.upgrade() {
                    session.expire_turn(seat, epoch);
                }
            }),
        };

        debug!(
            room_id = %self.room_id,
            seat,
            epoch,
            ?kind,
            delay_ms = delay.as_millis() as u64,
            "Dispatching turn"
        );
        let task = self.scheduler.schedule(delay, job);
        inner.pending = Some(PendingTask {
            kind,
            seat,
            epoch,
            task,
        });
    }

    /// Cancel any pending job and refuse further input. Jobs already in
    /// flight find the session closed and do nothing.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        if inner.phase == SessionPhase::Closed {
            return;
        }
        inner.cancel_pending();
        inner.phase = SessionPhase::Closed;
        inner.epoch += 1;
        info!(room_id = %self.room_id, round_no = inner.game.round_no, "Session closed");
        self.emit(SessionEvent::Closed);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().phase == SessionPhase::Closed
    }

    pub fn phase(&self) -> SessionPhase {
        self.inner.lock().phase
    }

    /// Current turn epoch; pass it back to
    /// [`attempt_move_at`](Self::attempt_move_at) to detect stale input.
    pub fn epoch(&self) -> u64 {
        self.inner.lock().epoch
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock();
        SessionSnapshot {
            room_id: self.room_id.clone(),
            phase: inner.phase,
            epoch: inner.epoch,
            seats: inner
                .seats
                .iter()
                .enumerate()
                .map(|(seat, controller)| controller.info(seat as Seat))
                .collect(),
            game: inner.game.snapshot(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Send without caring whether anyone listens.
    pub(super) fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }
}
