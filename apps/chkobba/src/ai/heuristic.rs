//! Heuristic — a greedy, deterministic baseline AI.
//!
//! Each accepted move is scored as
//! `100·[takes the haya] + 50·[clears the table] + Σ captured values`
//! and the first highest-scoring move wins. No randomness is used; `seed`
//! is accepted for registry uniformity only.

use crate::ai::trait_def::require_moves;
use crate::ai::{AiError, AiPlayer};
use crate::domain::player_view::CurrentTurnInfo;
use crate::domain::{cards_value, Move, HAYA};

#[derive(Clone)]
pub struct Heuristic {
    _seed: Option<u64>,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }

    pub fn score(state: &CurrentTurnInfo, mv: &Move) -> u32 {
        let mut score = cards_value(&mv.captures);
        if mv.captures.contains(&HAYA) {
            score += 100;
        }
        if state.clears_table(&mv.captures) {
            score += 50;
        }
        score
    }
}

impl AiPlayer for Heuristic {
    fn choose_move(&self, state: &CurrentTurnInfo) -> Result<Move, AiError> {
        let moves = require_moves(state)?;
        let mut best: Option<(&Move, u32)> = None;
        for mv in moves {
            let score = Self::score(state, mv);
            // Strictly greater keeps the first move among equals.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv.clone())
            .ok_or_else(|| AiError::Internal("no move scored".into()))
    }
}
