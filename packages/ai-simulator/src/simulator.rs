//! In-memory game simulator for AI evaluation.
//!
//! Plays complete games through the domain engine with no sessions, timers,
//! or think delays: each seat's policy is asked for a move, the move is
//! applied, and the turn passes on until someone reaches the target.

use chkobba::ai::AiPlayer;
use chkobba::domain::{CurrentTurnInfo, GameState, RoundSummary, Seat};
use tracing::{debug, warn};

/// Safety net against a rules bug looping forever.
const MAX_PLAYS: usize = 10_000;

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub final_scores: Vec<u32>,
    pub winner: Seat,
    pub rounds: Vec<RoundSummary>,
    pub plays: usize,
    /// Moves replaced by the fallback because a policy failed, per seat.
    pub fallbacks: Vec<u32>,
}

#[derive(Debug)]
pub enum SimError {
    Setup(String),
    Stuck { seat: Seat, round_no: u32 },
    NoTermination(usize),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Setup(msg) => write!(f, "setup failed: {msg}"),
            SimError::Stuck { seat, round_no } => {
                write!(f, "seat {seat} had no playable move in round {round_no}")
            }
            SimError::NoTermination(plays) => write!(f, "game not finished after {plays} plays"),
        }
    }
}

impl std::error::Error for SimError {}

pub struct Simulator {
    game_seed: u64,
    target_score: u16,
}

impl Simulator {
    pub fn new(game_seed: u64, target_score: u16) -> Self {
        Self {
            game_seed,
            target_score,
        }
    }

    /// Run one game with `ais[seat]` controlling each seat.
    pub fn simulate_game(&self, ais: &[Box<dyn AiPlayer>]) -> Result<GameResult, SimError> {
        let num_players = u8::try_from(ais.len()).map_err(|e| SimError::Setup(e.to_string()))?;
        let mut state = GameState::new(num_players, self.target_score, self.game_seed)
            .map_err(|e| SimError::Setup(e.to_string()))?;

        let mut rounds = Vec::new();
        let mut fallbacks = vec![0u32; ais.len()];
        let mut plays = 0usize;

        while !state.is_finished {
            if plays >= MAX_PLAYS {
                return Err(SimError::NoTermination(plays));
            }
            let seat = state.current_player;
            let view = CurrentTurnInfo::for_seat(&state, seat);

            let chosen = ais[seat as usize]
                .choose_move(&view)
                .map_err(|e| e.to_string())
                .and_then(|mv| {
                    state
                        .play_move(seat, &mv)
                        .map_err(|e| format!("rejected {mv:?}: {e}"))
                });

            let result = match chosen {
                Ok(result) => result,
                Err(reason) => {
                    warn!(seat, %reason, "Policy failed; playing fallback");
                    fallbacks[seat as usize] += 1;
                    let mv = state.fallback_move(seat).ok_or(SimError::Stuck {
                        seat,
                        round_no: state.round_no,
                    })?;
                    state
                        .play_move(seat, &mv)
                        .map_err(|e| SimError::Setup(e.to_string()))?
                }
            };

            if let Some(summary) = result.round_end {
                debug!(round_no = summary.round_no, "Round complete");
                rounds.push(summary);
            }
            state.next_turn();
            plays += 1;
        }

        let winner = state
            .winner
            .ok_or_else(|| SimError::Setup("finished game without a winner".to_string()))?;

        Ok(GameResult {
            final_scores: state.players.iter().map(|p| p.score).collect(),
            winner,
            rounds,
            plays,
            fallbacks,
        })
    }
}
