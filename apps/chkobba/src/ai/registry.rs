//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use serde::{Deserialize, Serialize};

use crate::ai::{AiPlayer, Heuristic, RandomPlayer, WeightedPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: WeightedPlayer::NAME,
        version: WeightedPlayer::VERSION,
        make: make_weighted,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_heuristic(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(Heuristic::new(seed))
}

fn make_weighted(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(WeightedPlayer::new(seed))
}

/// Player-facing difficulty levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl AiDifficulty {
    pub fn factory(self) -> &'static AiFactory {
        match self {
            AiDifficulty::Easy => &AI_FACTORIES[0],
            AiDifficulty::Medium => &AI_FACTORIES[1],
            AiDifficulty::Hard => &AI_FACTORIES[2],
        }
    }

    pub fn build(self, seed: Option<u64>) -> Box<dyn AiPlayer> {
        (self.factory().make)(seed)
    }
}
