//! Metrics collection and output for AI simulation results.

use chkobba::domain::RoundSummary;
use serde::Serialize;

use crate::simulator::GameResult;
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: Vec<String>,
    pub target_score: u16,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<u32>,
    pub winner: u8,
    pub rounds_played: usize,
    pub plays: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub round_points: Vec<u32>,
    pub cards: Vec<usize>,
    pub diamonds: Vec<usize>,
    pub chkobbas: Vec<u32>,
    /// Seat that took the haya this round, if anyone did.
    pub haya: Option<u8>,
    pub dinari: Option<u8>,
    pub leftover_to: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub total_score: u32,
    pub chkobbas: u32,
    pub hayas: u32,
    pub dinaris: u32,
    pub most_cards: u32,
    pub most_diamonds: u32,
    pub avg_round_points: f64,
    pub fallbacks: u32,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    ai_types: &[String],
    target_score: u16,
    total_games: u32,
    level: &MetricsLevel,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds = match level {
        MetricsLevel::Detailed => result.rounds.iter().map(build_round_metrics).collect(),
        MetricsLevel::Basic => Vec::new(),
    };

    let player_metrics = ai_types
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| build_player_metrics(seat, ai_type, result))
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: GameConfig {
            ai_types: ai_types.to_vec(),
            target_score,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winner: result.winner,
            rounds_played: result.rounds.len(),
            plays: result.plays,
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundSummary) -> RoundMetrics {
    RoundMetrics {
        round_no: round.round_no,
        round_points: round.seats.iter().map(|s| s.round_points).collect(),
        cards: round.seats.iter().map(|s| s.cards).collect(),
        diamonds: round.seats.iter().map(|s| s.diamonds).collect(),
        chkobbas: round.seats.iter().map(|s| s.chkobbas).collect(),
        haya: round.seats.iter().find(|s| s.haya).map(|s| s.seat),
        dinari: round.seats.iter().find(|s| s.dinari).map(|s| s.seat),
        leftover_to: round.leftover_to,
    }
}

fn build_player_metrics(seat: usize, ai_type: &str, result: &GameResult) -> PlayerMetrics {
    let rows: Vec<_> = result
        .rounds
        .iter()
        .filter_map(|round| round.seats.get(seat))
        .collect();
    let count = |pred: fn(&&chkobba::domain::SeatRoundScore) -> bool| {
        rows.iter().filter(|row| pred(row)).count() as u32
    };

    let total_round_points: u32 = rows.iter().map(|r| r.round_points).sum();
    let avg_round_points = if rows.is_empty() {
        0.0
    } else {
        total_round_points as f64 / rows.len() as f64
    };

    PlayerMetrics {
        seat: seat as u8,
        ai_type: ai_type.to_string(),
        total_score: result.final_scores.get(seat).copied().unwrap_or(0),
        chkobbas: rows.iter().map(|r| r.chkobbas).sum(),
        hayas: count(|r| r.haya),
        dinaris: count(|r| r.dinari),
        most_cards: count(|r| r.most_cards),
        most_diamonds: count(|r| r.most_diamonds),
        avg_round_points,
        fallbacks: result.fallbacks.get(seat).copied().unwrap_or(0),
    }
}

/// One CSV line per game. Per-seat columns are `;`-joined so the file keeps
/// a fixed shape for 2 to 4 seats.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: u8,
    pub num_players: usize,
    pub rounds: usize,
    pub scores: String,
    pub ai_types: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        Self {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            num_players: metrics.result.final_scores.len(),
            rounds: metrics.result.rounds_played,
            scores: metrics
                .result
                .final_scores
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            ai_types: metrics.config.ai_types.join(";"),
        }
    }
}
