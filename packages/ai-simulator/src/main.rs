//! AI Simulator CLI - fast in-memory Chkobba games between computer policies.
//!
//! Runs games entirely in memory, without sessions or timers, and writes
//! per-game metrics for comparing policies.

mod metrics;
mod output;
mod simulator;
mod types;

use chkobba::ai::{create_ai, AiPlayer};
use chkobba::domain::derive_ai_seed;
use chkobba::domain::rules::{MAX_PLAYERS, MIN_PLAYERS};
use clap::Parser;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use std::time::Instant;
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "Fast in-memory Chkobba simulator for comparing AI policies")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of seats (2-4)
    #[arg(short, long, default_value = "2")]
    players: u8,

    /// AI type for every seat (overrides --seat)
    #[arg(long, conflicts_with = "seat")]
    all: Option<AiType>,

    /// AI type per seat, in seat order; missing seats use heuristic
    #[arg(long, value_delimiter = ',')]
    seat: Vec<AiType>,

    /// Score needed to win (11 or 21)
    #[arg(long, default_value = "21")]
    target: u16,

    /// Base seed; game N uses seed + N - 1. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging - silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&args.players) {
        return Err(format!(
            "--players must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {}",
            args.players
        )
        .into());
    }

    let seat_types: Vec<AiType> = (0..args.players as usize)
        .map(|seat| {
            args.all
                .or_else(|| args.seat.get(seat).copied())
                .unwrap_or(AiType::Heuristic)
        })
        .collect();
    let ai_types: Vec<String> = seat_types.iter().map(|t| t.name().to_string()).collect();

    if args.show_output {
        info!(games = args.games, players = args.players, target = args.target, "Starting AI simulator");
        info!("AI types: {:?}", ai_types);
        info!("Output directory: {}", args.output_dir);
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = base_seed.wrapping_add(u64::from(game_num - 1));

        match run_game(game_seed, args.target, &seat_types) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    game_seed,
                    &ai_types,
                    args.target,
                    args.games,
                    &args.metrics_level,
                    &result,
                    duration_ms,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!("Game {} completed: scores={:?}", game_num, result.final_scores);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, &ai_types, errors, elapsed, args.games);
    }

    Ok(())
}

/// Fresh policies per game, seeded from the game seed so a game replays
/// exactly from its seed.
fn build_ais(game_seed: u64, seat_types: &[AiType]) -> Result<Vec<Box<dyn AiPlayer>>, String> {
    seat_types
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| {
            let config = serde_json::json!({ "seed": derive_ai_seed(game_seed, seat as u8) });
            create_ai(ai_type.name(), Some(&config))
                .ok_or_else(|| format!("Unknown AI type: {}", ai_type.name()))
        })
        .collect()
}

fn run_game(
    game_seed: u64,
    target: u16,
    seat_types: &[AiType],
) -> Result<GameResult, Box<dyn std::error::Error>> {
    let ais = build_ais(game_seed, seat_types)?;
    let simulator = Simulator::new(game_seed, target);
    simulator.simulate_game(&ais).map_err(|e| e.into())
}

fn print_summary(
    results: &[GameResult],
    ai_types: &[String],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let seats = ai_types.len();
    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0u64; seats];
    let mut max_scores = vec![u32::MIN; seats];
    let mut min_scores = vec![u32::MAX; seats];
    let mut total_rounds = 0usize;

    for result in results {
        wins[result.winner as usize] += 1;
        total_rounds += result.rounds.len();
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += u64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
    }

    println!(
        "Average rounds per game: {:.2}",
        total_rounds as f64 / results.len() as f64
    );
    println!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, ai_types[seat], avg_score, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}
