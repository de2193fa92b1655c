use crate::errors::domain::{DomainError, ValidationKind};

pub const DECK_SIZE: usize = 40;
/// Cards dealt to each seat per deal.
pub const HAND_SIZE: usize = 3;
/// Face-up cards dealt to the table at round start.
pub const TABLE_DEAL: usize = 4;
pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 4;
/// Round-capture count needed for the most-cards point.
pub const MOST_CARDS_THRESHOLD: usize = 21;
pub const DEFAULT_TARGET_SCORE: u16 = 21;
pub const ALLOWED_TARGET_SCORES: [u16; 2] = [11, 21];

pub fn validate_player_count(num_players: u8) -> Result<(), DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {num_players}"),
        ));
    }
    Ok(())
}

pub fn validate_target_score(target: u16) -> Result<(), DomainError> {
    if !ALLOWED_TARGET_SCORES.contains(&target) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTargetScore,
            format!("Target score must be 11 or 21, got {target}"),
        ));
    }
    Ok(())
}

/// Cards needed to give every seat a fresh hand.
#[inline]
pub fn redeal_size(num_players: u8) -> usize {
    HAND_SIZE * num_players as usize
}
