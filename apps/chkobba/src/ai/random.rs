//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the reference implementation of [`AiPlayer`](super::AiPlayer):
//! interior mutability for the RNG, optional seeding for reproducible tests,
//! and no panics.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{require_moves, AiError, AiPlayer};
use crate::domain::player_view::CurrentTurnInfo;
use crate::domain::Move;

/// AI that picks uniformly among the accepted moves.
///
/// # Usage
///
/// ```rust,ignore
/// use chkobba::ai::RandomPlayer;
///
/// // Non-deterministic (uses system entropy)
/// let random_ai = RandomPlayer::new(None);
///
/// // Deterministic (uses seed for reproducible behavior)
/// let seeded_ai = RandomPlayer::new(Some(12345));
/// ```
pub struct RandomPlayer {
    /// `AiPlayer` takes `&self`, so the RNG sits behind a `Mutex`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new `RandomPlayer`.
    ///
    /// * `seed` - `Some(seed)` for reproducible choices, `None` for OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, state: &CurrentTurnInfo) -> Result<Move, AiError> {
        let moves = require_moves(state)?;

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        moves
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| AiError::Internal("Failed to choose random move".into()))
    }
}
