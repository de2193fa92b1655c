//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Derives unique-but-deterministic seeds for the per-round shuffle and
//! for computer seats from a single base game seed.

/// Derive a seed for shuffling the deck of a round.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed of the game
/// * `round_no` - Round number (1-based)
///
/// # Returns
///
/// Derived seed that is unique per (game, round) combination.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from AI seeds
}

/// Derive a seed for a computer seat that was not given an explicit one.
///
/// Same game + seat = same decisions, different seats draw different
/// noise even when running the same policy.
pub fn derive_ai_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
