//! Intent matching by token overlap.
//!
//! Every intent is scored against the normalized input:
//! 1. For each pattern, `matching input tokens / max(input len, pattern len)`,
//!    summed over all of the intent's patterns.
//! 2. `+ emotion_boost` when the detected emotion boosts the intent's tag.
//! 3. `+ crisis_boost` for crisis intents when the emotion is crisis.
//!
//! The best intent must score strictly above the threshold; ties keep the
//! earliest intent in catalog order.

use std::sync::Arc;
use tracing::debug;

use super::catalog::{IntentCatalog, IntentDefinition};
use super::emotion::{Emotion, EmotionAnalyzer};
use super::normalizer::{normalize, partial_match};
use crate::config::EngineConfig;
use crate::models::SupportType;

/// A selected intent with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentMatch<'a> {
    pub intent: &'a IntentDefinition,
    pub score: f32,
}

/// Picks the intent that best fits a message.
pub trait IntentMatcher: Send + Sync {
    /// Returns the best intent for `tokens`, or `None` if nothing clears the threshold.
    fn best_match(&self, tokens: &[String], emotion: Option<Emotion>) -> Option<IntentMatch<'_>>;
}

/// Scoring weights for [`KeywordIntentMatcher`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub threshold: f32,
    pub emotion_boost: f32,
    pub crisis_boost: f32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            emotion_boost: 0.5,
            crisis_boost: 1.0,
        }
    }
}

impl From<&EngineConfig> for MatchWeights {
    fn from(config: &EngineConfig) -> Self {
        Self {
            threshold: config.match_threshold,
            emotion_boost: config.emotion_boost,
            crisis_boost: config.crisis_boost,
        }
    }
}

/// Token-overlap matcher over a shared catalog.
pub struct KeywordIntentMatcher {
    catalog: Arc<IntentCatalog>,
    /// Normalized pattern tokens, parallel to `catalog.intents()`
    pattern_tokens: Vec<Vec<Vec<String>>>,
    weights: MatchWeights,
}

impl KeywordIntentMatcher {
    pub fn new(catalog: Arc<IntentCatalog>) -> Self {
        Self::with_weights(catalog, MatchWeights::default())
    }

    /// Normalizes every pattern once up front.
    pub fn with_weights(catalog: Arc<IntentCatalog>, weights: MatchWeights) -> Self {
        let pattern_tokens = catalog
            .intents()
            .iter()
            .map(|intent| intent.patterns.iter().map(|p| normalize(p)).collect())
            .collect();

        Self {
            catalog,
            pattern_tokens,
            weights,
        }
    }

    pub fn catalog(&self) -> &Arc<IntentCatalog> {
        &self.catalog
    }

    /// Score a single intent (by catalog index) against the input.
    fn score(&self, index: usize, tokens: &[String], emotion: Option<Emotion>) -> f32 {
        let intent = &self.catalog.intents()[index];
        let mut score: f32 = 0.0;

        for pattern in &self.pattern_tokens[index] {
            let matching = tokens
                .iter()
                .filter(|word| pattern.iter().any(|p| partial_match(p, word)))
                .count();

            if matching > 0 {
                score += matching as f32 / tokens.len().max(pattern.len()) as f32;
            }
        }

        if let Some(emotion) = emotion {
            if self.catalog.is_boosted(emotion, &intent.tag) {
                score += self.weights.emotion_boost;
            }
            if emotion == Emotion::Crisis && intent.support_type == SupportType::Crisis {
                score += self.weights.crisis_boost;
            }
        }

        score
    }

    /// Match raw text, running emotion analysis on it first.
    pub fn match_text(&self, text: &str) -> Option<IntentMatch<'_>> {
        let tokens = normalize(text);
        let emotion = EmotionAnalyzer::new().analyze_tokens(&tokens).emotion;
        self.best_match(&tokens, emotion)
    }
}

impl IntentMatcher for KeywordIntentMatcher {
    fn best_match(&self, tokens: &[String], emotion: Option<Emotion>) -> Option<IntentMatch<'_>> {
        let mut best: Option<IntentMatch<'_>> = None;
        let mut best_score: f32 = 0.0;

        for (index, intent) in self.catalog.intents().iter().enumerate() {
            let score = self.score(index, tokens, emotion);

            if score > best_score && score > self.weights.threshold {
                best_score = score;
                best = Some(IntentMatch { intent, score });
            }
        }

        match &best {
            Some(m) => debug!(tag = %m.intent.tag, score = m.score, "intent matched"),
            None => debug!("no intent above threshold"),
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> KeywordIntentMatcher {
        KeywordIntentMatcher::new(Arc::new(IntentCatalog::builtin()))
    }

    #[test]
    fn test_greeting() {
        let matcher = matcher();
        let result = matcher.match_text("hi").map(|m| m.intent.tag.as_str());
        assert_eq!(result, Some("greeting"));
    }

    #[test]
    fn test_sad_feeling() {
        let matcher = matcher();
        let result = matcher.match_text("I feel sad today").map(|m| m.intent.tag.as_str());
        assert_eq!(result, Some("feeling_sad"));
    }

    #[test]
    fn test_how_are_you() {
        let matcher = matcher();
        let result = matcher.match_text("How are you?").map(|m| m.intent.tag.as_str());
        assert_eq!(result, Some("how_are_you"));
    }

    #[test]
    fn test_nothing_matches() {
        let matcher = matcher();
        assert!(matcher.match_text("").is_none());
        assert!(matcher.match_text("?!?").is_none());
        assert!(matcher.match_text("xyzzy").is_none());
    }
}
