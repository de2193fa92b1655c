#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Chkobba card-game engine: rules, computer players, and turn-by-turn
//! session orchestration with timeouts.

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use ai::{AiDifficulty, AiError, AiPlayer};
pub use config::game::GameSettings;
pub use domain::{Card, GameSnapshot, GameState, Move, RoundSummary, Seat};
pub use error::{AppError, Rejection};
pub use errors::ErrorCode;
pub use services::game_flow::{
    MoveOutcome, MoveSource, SeatConfig, Session, SessionConfig, SessionEvent, SessionPhase,
    SessionSnapshot, SessionTiming, TurnAdvance,
};
pub use services::scheduler::{ManualScheduler, ScheduledTask, Scheduler, TokioScheduler};
pub use services::sessions::SessionRegistry;

// Prelude for test convenience
pub mod prelude {
    pub use super::ai::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::services::game_flow::*;
    pub use super::services::scheduler::*;
    pub use super::services::sessions::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    chkobba_test_support::logging::init();
}
