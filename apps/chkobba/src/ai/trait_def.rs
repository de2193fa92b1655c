//! AI player trait definition.

use std::fmt;

use crate::domain::player_view::CurrentTurnInfo;
use crate::domain::Move;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Nothing to choose from (empty hand)
    NoLegalMoves(String),
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoLegalMoves(msg) => write!(f, "AI has no legal moves: {msg}"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for AI players.
///
/// Implementations receive the information visible to their seat and pick
/// one entry of `state.legal_moves()`. They never mutate game state.
pub trait AiPlayer: Send + Sync {
    /// Choose the card to play and the table cards to capture with it.
    fn choose_move(&self, state: &CurrentTurnInfo) -> Result<Move, AiError>;
}

pub(crate) fn require_moves(state: &CurrentTurnInfo) -> Result<&[Move], AiError> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Err(AiError::NoLegalMoves(format!(
            "seat {} holds {} cards",
            state.seat,
            state.hand.len()
        )));
    }
    Ok(moves)
}
