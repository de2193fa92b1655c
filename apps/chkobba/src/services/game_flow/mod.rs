//! Session orchestration - drives one room's game through its turns.
//!
//! A [`Session`] owns the game state, the seat controllers, and at most one
//! pending scheduled job (a human turn timeout or an AI decision). Network
//! moves, timeouts, and AI decisions all funnel through the same session
//! mutex, and every scheduled job carries the turn epoch it was armed for so
//! late arrivals are discarded.

mod ai_coordinator;
mod mutation;
mod orchestration;
mod player_actions;
pub mod seats;

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

pub use seats::{SeatConfig, SeatInfo};
use seats::SeatController;

use crate::ai::AiDifficulty;
use crate::config::game::GameSettings;
use crate::domain::{Card, GameSnapshot, GameState, RoundSummary, Seat};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::services::scheduler::{ScheduledTask, Scheduler};

pub type RoomId = String;

/// Capacity of each session's event channel; slow subscribers lag.
const EVENT_CAPACITY: usize = 64;

/// Delays applied when dispatching a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// How long a human seat may think before its move is auto-played.
    pub human_timeout: Duration,
    /// Pause before a computer seat acts.
    pub ai_think_delay: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self::from(&GameSettings::default())
    }
}

impl From<&GameSettings> for SessionTiming {
    fn from(settings: &GameSettings) -> Self {
        Self {
            human_timeout: settings.human_timeout,
            ai_think_delay: settings.ai_think_delay,
        }
    }
}

/// Everything needed to open a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub room_id: RoomId,
    pub seats: Vec<SeatConfig>,
    pub target_score: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip)]
    pub timing: SessionTiming,
}

impl SessionConfig {
    /// One human at seat 0 against medium computer opponents.
    pub fn new(room_id: impl Into<RoomId>, num_players: u8, target_score: u16) -> Self {
        let seats = (0..num_players)
            .map(|seat| {
                if seat == 0 {
                    SeatConfig::Human
                } else {
                    SeatConfig::computer(AiDifficulty::Medium)
                }
            })
            .collect();
        Self {
            room_id: room_id.into(),
            seats,
            target_score,
            seed: None,
            timing: SessionTiming::default(),
        }
    }

    pub fn with_seats(mut self, seats: Vec<SeatConfig>) -> Self {
        self.seats = seats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_timing(mut self, timing: SessionTiming) -> Self {
        self.timing = timing;
        self
    }
}

/// Where a session stands in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    AwaitingMove { seat: Seat },
    /// A move was applied and the next dispatch has not happened yet.
    TurnResolved,
    GameOver { winner: Seat },
    Closed,
}

/// Result of moving the state machine on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "seat", rename_all = "snake_case")]
pub enum TurnAdvance {
    Seat(Seat),
    GameOver(Seat),
}

/// Who produced an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveSource {
    Player,
    Timeout,
    Ai,
    /// Played on a computer seat's behalf after its policy failed.
    Fallback,
}

/// An accepted move and where the session went next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub seat: Seat,
    pub card: Card,
    pub captured: Vec<Card>,
    pub is_chkobba: bool,
    pub is_haya: bool,
    pub new_cards_dealt: bool,
    pub round_end: Option<RoundSummary>,
    pub next: TurnAdvance,
    pub source: MoveSource,
}

/// Broadcast to everyone watching a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    CardPlayed {
        seat: Seat,
        card: Card,
        captured: Vec<Card>,
        is_chkobba: bool,
        is_haya: bool,
        new_cards_dealt: bool,
        source: MoveSource,
    },
    TurnChanged {
        seat: Seat,
        round_no: u32,
    },
    RoundEnded(RoundSummary),
    GameOver {
        winner: Seat,
        scores: Vec<u32>,
    },
    TurnTimedOut {
        seat: Seat,
    },
    AiFallback {
        seat: Seat,
        reason: String,
    },
    Closed,
}

/// Serializable view of a whole session. Hands are not redacted; use
/// [`GameSnapshot::for_viewer`] before sending `game` to a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub room_id: RoomId,
    pub phase: SessionPhase,
    pub epoch: u64,
    pub seats: Vec<SeatInfo>,
    pub game: GameSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingKind {
    HumanTimeout,
    AiDecision,
}

struct PendingTask {
    kind: PendingKind,
    seat: Seat,
    epoch: u64,
    task: ScheduledTask,
}

struct SessionInner {
    game: GameState,
    seats: Vec<SeatController>,
    phase: SessionPhase,
    /// Bumped on every accepted move and on close.
    epoch: u64,
    pending: Option<PendingTask>,
}

impl SessionInner {
    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!(
                seat = pending.seat,
                epoch = pending.epoch,
                kind = ?pending.kind,
                "Cancelling pending job"
            );
            pending.task.cancel();
        }
    }

    /// Whether a job armed for `(seat, epoch)` still applies.
    fn is_current(&self, seat: Seat, epoch: u64) -> bool {
        self.epoch == epoch && self.phase == SessionPhase::AwaitingMove { seat }
    }

    fn ensure_open(&self, room_id: &str) -> Result<(), DomainError> {
        if self.phase == SessionPhase::Closed {
            return Err(DomainError::conflict(
                ConflictKind::SessionClosed,
                format!("Session {room_id} is closed"),
            ));
        }
        Ok(())
    }
}

/// One room's game plus its turn machinery.
pub struct Session {
    room_id: RoomId,
    timing: SessionTiming,
    scheduler: Arc<dyn Scheduler>,
    events: broadcast::Sender<SessionEvent>,
    this: Weak<Session>,
    inner: Mutex<SessionInner>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("room_id", &self.room_id)
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}
