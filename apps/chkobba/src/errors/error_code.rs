//! Error codes surfaced to clients of the Chkobba engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and appear verbatim in rejection
//! payloads.

use core::fmt;

/// Centralized rejection codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Move validation
    /// Malformed card code
    InvalidCard,
    /// Acting seat is not the current player
    NotPlayersTurn,
    /// Card not in hand
    CardNotInHand,
    /// Every hand card can capture but the move captured nothing
    CaptureMandatory,
    /// Requested capture card is not on the table
    CardNotOnTable,
    /// Capture values do not add up to the played card
    CaptureSumMismatch,
    /// Multi-card capture while a single matching card exists
    ComboNotAllowed,
    /// Capture set is not one of the allowed sets
    InvalidCaptureCombination,
    /// The game already has a winner
    GameFinished,

    // Session setup
    InvalidPlayerCount,
    InvalidTargetScore,

    // Session lifecycle
    /// Move was generated for an older turn
    StaleMove,
    SessionClosed,
    SessionExists,
    SessionNotFound,

    /// Malformed settings
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCard => "INVALID_CARD",
            Self::NotPlayersTurn => "NOT_PLAYERS_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::CaptureMandatory => "CAPTURE_MANDATORY",
            Self::CardNotOnTable => "CARD_NOT_ON_TABLE",
            Self::CaptureSumMismatch => "CAPTURE_SUM_MISMATCH",
            Self::ComboNotAllowed => "COMBO_NOT_ALLOWED",
            Self::InvalidCaptureCombination => "INVALID_CAPTURE_COMBINATION",
            Self::GameFinished => "GAME_FINISHED",

            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidTargetScore => "INVALID_TARGET_SCORE",

            Self::StaleMove => "STALE_MOVE",
            Self::SessionClosed => "SESSION_CLOSED",
            Self::SessionExists => "SESSION_EXISTS",
            Self::SessionNotFound => "SESSION_NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
