use std::env;
use std::time::Duration;

use crate::domain::rules::{validate_target_score, DEFAULT_TARGET_SCORE};
use crate::error::AppError;

/// Overrides the default target score.
pub const TARGET_SCORE_VAR: &str = "CHKOBBA_TARGET_SCORE";
/// Human turn timeout, milliseconds.
pub const TURN_TIMEOUT_VAR: &str = "CHKOBBA_TURN_TIMEOUT_MS";
/// Computer think delay, milliseconds.
pub const AI_THINK_VAR: &str = "CHKOBBA_AI_THINK_MS";

/// Process-wide game defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub default_target_score: u16,
    pub human_timeout: Duration,
    pub ai_think_delay: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_target_score: DEFAULT_TARGET_SCORE,
            human_timeout: Duration::from_secs(10),
            ai_think_delay: Duration::from_millis(500),
        }
    }
}

impl GameSettings {
    /// Defaults overridden by whichever `CHKOBBA_*` variables are set.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let default_target_score = match optional_var(TARGET_SCORE_VAR) {
            Some(raw) => {
                let target = parse_var::<u16>(TARGET_SCORE_VAR, &raw)?;
                validate_target_score(target)
                    .map_err(|e| AppError::config(format!("{TARGET_SCORE_VAR}: {e}")))?;
                target
            }
            None => defaults.default_target_score,
        };

        let human_timeout = optional_var(TURN_TIMEOUT_VAR)
            .map(|raw| parse_millis(TURN_TIMEOUT_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.human_timeout);

        let ai_think_delay = optional_var(AI_THINK_VAR)
            .map(|raw| parse_millis(AI_THINK_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.ai_think_delay);

        Ok(Self {
            default_target_score,
            human_timeout,
            ai_think_delay,
        })
    }
}

/// Set and non-blank.
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.parse::<T>()
        .map_err(|_| AppError::config(format!("Invalid value for '{name}': '{raw}'")))
}

fn parse_millis(name: &str, raw: &str) -> Result<Duration, AppError> {
    parse_var::<u64>(name, raw).map(Duration::from_millis)
}
