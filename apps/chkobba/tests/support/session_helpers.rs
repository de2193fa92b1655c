#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chkobba::domain::Card;
use chkobba::services::scheduler::{Job, ManualScheduler, ScheduledTask, Scheduler};
use chkobba::{
    AiDifficulty, MoveOutcome, SeatConfig, Session, SessionConfig, SessionEvent, SessionTiming,
};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

pub const TIMEOUT: Duration = Duration::from_secs(10);
pub const THINK: Duration = Duration::from_millis(500);

pub fn timing() -> SessionTiming {
    SessionTiming {
        human_timeout: TIMEOUT,
        ai_think_delay: THINK,
    }
}

pub fn humans(n: usize) -> Vec<SeatConfig> {
    vec![SeatConfig::Human; n]
}

pub fn computers(n: usize, difficulty: AiDifficulty) -> Vec<SeatConfig> {
    vec![SeatConfig::computer(difficulty); n]
}

pub fn config(room: &str, seats: Vec<SeatConfig>, target: u16, seed: u64) -> SessionConfig {
    SessionConfig::new(room, seats.len() as u8, target)
        .with_seats(seats)
        .with_seed(seed)
        .with_timing(timing())
}

pub fn manual_session(config: SessionConfig) -> (ManualScheduler, Arc<Session>) {
    let scheduler = ManualScheduler::new();
    let session = Session::start(config, Arc::new(scheduler.clone())).expect("session starts");
    (scheduler, session)
}

pub fn hand_of(session: &Session, seat: u8) -> Vec<Card> {
    session.snapshot().game.seats[seat as usize]
        .hand
        .clone()
        .expect("full snapshot reveals hands")
}

/// Play the first candidate the rules accept for `seat`.
pub fn play_any(session: &Session, seat: u8) -> MoveOutcome {
    let candidates = session.legal_moves(seat).expect("legal moves");
    candidates
        .iter()
        .find_map(|mv| session.attempt_move(seat, mv.card, &mv.captures).ok())
        .expect("some candidate is accepted")
}

/// Everything currently buffered on `rx`, skipping over lag.
pub fn drain(rx: &mut Receiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }
    events
}

/// Delegates to a manual clock but hands out tasks that cannot be
/// cancelled, so superseded jobs still fire.
#[derive(Clone, Default)]
pub struct UncancellableScheduler {
    pub clock: ManualScheduler,
}

impl Scheduler for UncancellableScheduler {
    fn schedule(&self, delay: Duration, job: Job) -> ScheduledTask {
        let _ = self.clock.schedule(delay, job);
        ScheduledTask::detached()
    }
}
