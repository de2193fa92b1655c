//! Runtime services: scheduling, per-room sessions, and the session registry.

pub mod game_flow;
pub mod scheduler;
pub mod sessions;
