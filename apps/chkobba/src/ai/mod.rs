//! AI player module - automated move selection.
//!
//! This module provides:
//! - AI trait for different AI implementations
//! - RandomPlayer (easy), Heuristic (medium), WeightedPlayer (hard)
//! - A static registry and JSON-config construction helper

mod config;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;
mod weighted;

pub use config::AiConfig;
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use registry::AiDifficulty;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};
pub use weighted::{WeightedPlayer, DEFAULT_NOISE};

/// Create an AI player from a registered name and optional JSON config.
///
/// Returns None if `ai_type` is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let config = AiConfig::from_json(config);
    if ai_type == WeightedPlayer::NAME {
        let noise = config
            .get_custom("noise")
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_NOISE);
        return Some(Box::new(WeightedPlayer::with_noise(config.seed(), noise)));
    }
    registry::by_name(ai_type).map(|factory| (factory.make)(config.seed()))
}
