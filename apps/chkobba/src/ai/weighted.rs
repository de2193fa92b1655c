//! Weighted — richer evaluation with a noise term.
//!
//! Score per accepted move:
//!
//! ```text
//! 100·haya + 75·clears table + 2·Σ captured values + 1.5·|captures|
//!   − 10·[card value < max table value and no capture]
//!   + uniform noise in [−noise, noise]
//! ```
//!
//! The noise makes the policy non-deterministic unless seeded. Seeded
//! instances replay the same choices for the same sequence of states.

use std::sync::Mutex;

use rand::prelude::*;

use crate::ai::trait_def::require_moves;
use crate::ai::{AiError, AiPlayer};
use crate::domain::player_view::CurrentTurnInfo;
use crate::domain::{cards_value, Move, HAYA};

pub const DEFAULT_NOISE: f64 = 5.0;

pub struct WeightedPlayer {
    rng: Mutex<StdRng>,
    noise: f64,
}

impl WeightedPlayer {
    pub const NAME: &'static str = "Weighted";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self::with_noise(seed, DEFAULT_NOISE)
    }

    /// `noise` is the half-width of the uniform jitter; 0 disables it.
    pub fn with_noise(seed: Option<u64>, noise: f64) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
            noise: noise.abs(),
        }
    }

    /// Score without the noise term.
    pub fn base_score(state: &CurrentTurnInfo, mv: &Move) -> f64 {
        let mut score = 0.0;
        if mv.captures.contains(&HAYA) {
            score += 100.0;
        }
        if state.clears_table(&mv.captures) {
            score += 75.0;
        }
        score += 2.0 * f64::from(cards_value(&mv.captures));
        score += 1.5 * mv.captures.len() as f64;
        if mv.captures.is_empty() && mv.card.value() < state.max_table_value() {
            score -= 10.0;
        }
        score
    }
}

impl AiPlayer for WeightedPlayer {
    fn choose_move(&self, state: &CurrentTurnInfo) -> Result<Move, AiError> {
        let moves = require_moves(state)?;
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let mut best: Option<(&Move, f64)> = None;
        for mv in moves {
            let jitter = if self.noise > 0.0 {
                rng.random_range(-self.noise..=self.noise)
            } else {
                0.0
            };
            let score = Self::base_score(state, mv) + jitter;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv.clone())
            .ok_or_else(|| AiError::Internal("no move scored".into()))
    }
}
