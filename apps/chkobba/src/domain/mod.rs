//! Domain layer: pure game logic types and helpers.

pub mod captures;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod player_view;
pub mod plays;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
#[cfg(test)]
pub(crate) mod test_state_helpers;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_captures;
#[cfg(test)]
mod tests_domain_dealing;
#[cfg(test)]
mod tests_game_transition;
#[cfg(test)]
mod tests_props_consistency;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use captures::{can_capture, find_captures, has_single_match, Move};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{cards_value, Card, Rank, Suit, DINARI, HAYA};
pub use dealing::{full_deck, Deck, RedealOutcome};
pub use player_view::CurrentTurnInfo;
pub use plays::PlayResult;
pub use scoring::{pick_winner, score_round, RoundSummary, SeatRoundScore};
pub use seed_derivation::{derive_ai_seed, derive_dealing_seed};
pub use snapshot::{GameSnapshot, SeatSnapshot};
pub use state::{GameState, MoveRecord, PlayerState, Seat};
