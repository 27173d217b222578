//! Engine configuration.
//!
//! Defaults reproduce the reference tuning. Every field can be overridden
//! through `KINDRED_*` environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const ENV_MATCH_THRESHOLD: &str = "KINDRED_MATCH_THRESHOLD";
pub const ENV_EMOTION_BOOST: &str = "KINDRED_EMOTION_BOOST";
pub const ENV_CRISIS_BOOST: &str = "KINDRED_CRISIS_BOOST";
pub const ENV_PERSONALIZE_PROBABILITY: &str = "KINDRED_PERSONALIZE_PROBABILITY";
pub const ENV_FOLLOW_UP_PROBABILITY: &str = "KINDRED_FOLLOW_UP_PROBABILITY";
pub const ENV_SEED: &str = "KINDRED_SEED";

/// Tunable constants for matching and response generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EngineConfig {
    /// An intent must score strictly above this to be selected.
    #[validate(range(min = 0.0))]
    pub match_threshold: f32,
    /// Added when the detected emotion boosts an intent.
    #[validate(range(min = 0.0))]
    pub emotion_boost: f32,
    /// Added to crisis intents when the detected emotion is crisis.
    #[validate(range(min = 0.0))]
    pub crisis_boost: f32,
    /// Chance of prefixing a matched reply with the user's name.
    #[validate(range(min = 0.0, max = 1.0))]
    pub personalize_probability: f64,
    /// Chance of appending a follow-up question.
    #[validate(range(min = 0.0, max = 1.0))]
    pub follow_up_probability: f64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.2,
            emotion_boost: 0.5,
            crisis_boost: 1.0,
            personalize_probability: 0.3,
            follow_up_probability: 0.4,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by whichever `KINDRED_*` variables are set.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        override_from_env(ENV_MATCH_THRESHOLD, &mut config.match_threshold)?;
        override_from_env(ENV_EMOTION_BOOST, &mut config.emotion_boost)?;
        override_from_env(ENV_CRISIS_BOOST, &mut config.crisis_boost)?;
        override_from_env(ENV_PERSONALIZE_PROBABILITY, &mut config.personalize_probability)?;
        override_from_env(ENV_FOLLOW_UP_PROBABILITY, &mut config.follow_up_probability)?;

        if let Some(raw) = read_var(ENV_SEED) {
            config.seed = Some(parse_var(ENV_SEED, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn read_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} has invalid value '{}'", key, raw)))
}

fn override_from_env<T: FromStr>(key: &str, target: &mut T) -> Result<(), AppError> {
    if let Some(raw) = read_var(key) {
        *target = parse_var(key, &raw)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.match_threshold, 0.2);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_probability_out_of_range() {
        let config = EngineConfig {
            follow_up_probability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
