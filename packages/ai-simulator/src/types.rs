//! Shared types for the simulator.

use chkobba::ai::{Heuristic, RandomPlayer, WeightedPlayer};
use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Random,
    Heuristic,
    Weighted,
}

impl AiType {
    /// Name under which the policy is registered.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Random => RandomPlayer::NAME,
            AiType::Heuristic => Heuristic::NAME,
            AiType::Weighted => WeightedPlayer::NAME,
        }
    }
}
