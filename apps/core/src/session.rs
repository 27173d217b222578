//! Conversation session.
//!
//! One [`ConversationSession`] per conversation. It owns the bot-message
//! history and the ambient emotional context, so concurrent conversations
//! each need their own instance. Every operation is synchronous and
//! infallible once the session is built.
//!
//! Turn pipeline:
//! 1. Normalize and run emotion analysis.
//! 2. Crisis emotion: reply with a fixed crisis resource, skip matching.
//! 3. Otherwise match an intent and generate (or fall back to) a reply.
//!    A matched crisis intent is escalated to the crisis reply of step 2.
//! 4. Record the reply in history; update the emotional context when an
//!    emotion was detected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::brain::{
    normalize, Emotion, EmotionAnalysis, EmotionAnalyzer, IntentCatalog, IntentMatch, IntentMatcher,
    KeywordIntentMatcher, MatchWeights, ResponseGenerator,
};
use crate::config::EngineConfig;
use crate::error::AppError;
use crate::models::{ConversationInsights, ConversationMessage, EmotionalContext, SupportType};
use validator::Validate;

/// Per-conversation engine state.
pub struct ConversationSession<M = KeywordIntentMatcher, R = StdRng> {
    analyzer: EmotionAnalyzer,
    matcher: M,
    responder: ResponseGenerator,
    rng: R,
    history: Vec<ConversationMessage>,
    emotional_context: EmotionalContext,
}

impl ConversationSession {
    /// Built-in catalog, default tuning, entropy-seeded RNG.
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self::build(Arc::new(IntentCatalog::builtin()), &config)
    }

    /// Validates `config` and builds a session over `catalog`.
    pub fn with_config(catalog: Arc<IntentCatalog>, config: &EngineConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self::build(catalog, config))
    }

    fn build(catalog: Arc<IntentCatalog>, config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            analyzer: EmotionAnalyzer::new(),
            matcher: KeywordIntentMatcher::with_weights(catalog, MatchWeights::from(config)),
            responder: ResponseGenerator::from(config),
            rng,
            history: Vec::new(),
            emotional_context: EmotionalContext::default(),
        }
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: IntentMatcher, R: Rng> ConversationSession<M, R> {
    /// Replaces the intent matcher, keeping the rest of the session.
    pub fn with_matcher<M2: IntentMatcher>(self, matcher: M2) -> ConversationSession<M2, R> {
        ConversationSession {
            analyzer: self.analyzer,
            matcher,
            responder: self.responder,
            rng: self.rng,
            history: self.history,
            emotional_context: self.emotional_context,
        }
    }

    /// Replaces the random source, keeping the rest of the session.
    pub fn with_rng<R2: Rng>(self, rng: R2) -> ConversationSession<M, R2> {
        ConversationSession {
            analyzer: self.analyzer,
            matcher: self.matcher,
            responder: self.responder,
            rng,
            history: self.history,
            emotional_context: self.emotional_context,
        }
    }

    /// Produces the bot reply for one user message and records it.
    ///
    /// A crisis intent reached through matching is escalated to the
    /// crisis path, so its reply is never personalized.
    #[instrument(skip(self, input, user_name), fields(turn = self.history.len() + 1))]
    pub fn process_message(&mut self, input: &str, user_name: Option<&str>) -> ConversationMessage {
        let tokens = normalize(input);
        let mut analysis = self.analyzer.analyze_tokens(&tokens);
        debug!(emotion = ?analysis.emotion, intensity = analysis.intensity, "emotion analysed");

        // None means the turn takes the crisis path
        let reply = if analysis.is_crisis() {
            None
        } else {
            match self.matcher.best_match(&tokens, analysis.emotion) {
                Some(IntentMatch { intent, .. }) if intent.support_type == SupportType::Crisis => {
                    warn!(tag = %intent.tag, "crisis intent matched without crisis keywords, escalating");
                    analysis.emotion = Some(Emotion::Crisis);
                    None
                }
                Some(IntentMatch { intent, .. }) => Some((
                    self.responder.respond(intent, user_name, &mut self.rng),
                    intent.support_type,
                )),
                None => Some((
                    self.responder.fallback(user_name, &mut self.rng),
                    SupportType::Emotional,
                )),
            }
        };

        if let Some(emotion) = analysis.emotion {
            self.emotional_context = EmotionalContext {
                current_emotion: Some(emotion),
                intensity: analysis.intensity,
            };
        }

        let message = match reply {
            Some((content, support_type)) => {
                ConversationMessage::bot(content, analysis.emotion, support_type)
            }
            None => {
                warn!("crisis language detected, sending crisis resources");
                let content = self.responder.crisis_response(&mut self.rng).to_string();
                ConversationMessage::bot(content, analysis.emotion, SupportType::Crisis)
            }
        };

        self.history.push(message.clone());
        message
    }

    /// Emotion analysis without touching session state.
    pub fn analyze_emotion(&self, text: &str) -> EmotionAnalysis {
        self.analyzer.analyze(text)
    }

    /// Intent matching without touching session state.
    pub fn match_intent(&self, text: &str) -> Option<IntentMatch<'_>> {
        let tokens = normalize(text);
        let emotion = self.analyzer.analyze_tokens(&tokens).emotion;
        self.matcher.best_match(&tokens, emotion)
    }

    /// Summarizes the bot replies recorded so far.
    pub fn insights(&self) -> ConversationInsights {
        let mut emotion_counts = Vec::new();
        let mut support_types_used = Vec::new();

        for message in &self.history {
            if let Some(emotion) = message.emotion {
                match emotion_counts.iter_mut().find(|(e, _)| *e == emotion) {
                    Some((_, count)) => *count += 1,
                    None => emotion_counts.push((emotion, 1usize)),
                }
            }
            if let Some(support_type) = message.support_type {
                if !support_types_used.contains(&support_type) {
                    support_types_used.push(support_type);
                }
            }
        }

        let mut dominant_emotion = None;
        let mut best = 0;
        for (emotion, count) in emotion_counts {
            if count > best {
                best = count;
                dominant_emotion = Some(emotion);
            }
        }

        ConversationInsights {
            dominant_emotion,
            support_types_used,
            conversation_length: self.history.len(),
        }
    }

    /// Empties history and resets the emotional context.
    pub fn clear_history(&mut self) {
        info!(messages = self.history.len(), "clearing conversation history");
        self.history.clear();
        self.emotional_context = EmotionalContext::default();
    }

    pub fn history(&self) -> &[ConversationMessage] {
        &self.history
    }

    pub fn emotional_context(&self) -> &EmotionalContext {
        &self.emotional_context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> ConversationSession {
        let config = EngineConfig {
            seed: Some(seed),
            ..Default::default()
        };
        ConversationSession::with_config(Arc::new(IntentCatalog::builtin()), &config).unwrap()
    }

    #[test]
    fn test_greeting_reply() {
        let mut session = seeded(1);
        let reply = session.process_message("hi", None);
        assert_eq!(reply.support_type, Some(SupportType::Emotional));
        assert_eq!(reply.emotion, None);
        assert!(!reply.content.is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            personalize_probability: -0.1,
            ..Default::default()
        };
        let result = ConversationSession::with_config(Arc::new(IntentCatalog::builtin()), &config);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
