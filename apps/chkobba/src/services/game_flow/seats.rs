use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::{AiDifficulty, AiPlayer};
use crate::domain::{derive_ai_seed, Seat};

/// How a seat is controlled, as requested when opening a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatConfig {
    Human,
    Computer {
        #[serde(default)]
        difficulty: AiDifficulty,
        /// Explicit policy seed; derived from the game seed when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
}

impl SeatConfig {
    pub fn computer(difficulty: AiDifficulty) -> Self {
        SeatConfig::Computer {
            difficulty,
            seed: None,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, SeatConfig::Human)
    }
}

/// Public description of a seat's controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatInfo {
    pub seat: Seat,
    pub is_human: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<AiDifficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<&'static str>,
}

/// Runtime controller for a seat; computer seats own their policy instance.
pub(super) enum SeatController {
    Human,
    Computer {
        difficulty: AiDifficulty,
        ai: Box<dyn AiPlayer>,
    },
}

impl SeatController {
    pub(super) fn build(config: &SeatConfig, game_seed: u64, seat: Seat) -> Self {
        match *config {
            SeatConfig::Human => SeatController::Human,
            SeatConfig::Computer { difficulty, seed } => {
                let seed = seed.unwrap_or_else(|| derive_ai_seed(game_seed, seat));
                debug!(seat, ?difficulty, seed, "Building computer seat");
                SeatController::Computer {
                    difficulty,
                    ai: difficulty.build(Some(seed)),
                }
            }
        }
    }

    pub(super) fn is_computer(&self) -> bool {
        matches!(self, SeatController::Computer { .. })
    }

    pub(super) fn info(&self, seat: Seat) -> SeatInfo {
        match self {
            SeatController::Human => SeatInfo {
                seat,
                is_human: true,
                difficulty: None,
                policy: None,
            },
            SeatController::Computer { difficulty, .. } => SeatInfo {
                seat,
                is_human: false,
                difficulty: Some(*difficulty),
                policy: Some(difficulty.factory().name),
            },
        }
    }
}
