//! Response generation.
//!
//! Turns a matched intent (or the lack of one) into reply text. All
//! randomness comes from the caller's RNG so seeded sessions are
//! reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use super::catalog::IntentDefinition;
use crate::config::EngineConfig;
use crate::models::SupportType;

/// Fixed crisis-resource replies. Sent verbatim, never personalized.
pub const CRISIS_RESPONSES: &[&str] = &[
    "🚨 I'm very concerned about you. Please reach out for immediate help:\n• National Suicide Prevention Lifeline: 988\n• Crisis Text Line: Text HOME to 741741\n• Emergency Services: 911\n\nYour life has value and there are people who want to help you right now.",
    "🚨 You don't have to face this alone. Please contact:\n• National Suicide Prevention Lifeline: 988\n• Crisis Text Line: Text HOME to 741741\n• Or go to your nearest emergency room\n\nThere are people trained to help you through this crisis.",
    "🚨 I hear that you're in tremendous pain. Please reach out immediately:\n• Call 988 (Suicide Prevention Lifeline)\n• Text HOME to 741741 (Crisis Text Line)\n• Call 911 or go to the ER\n\nYou matter, and help is available right now.",
];

/// Hotline identifiers present in every crisis reply.
pub const CRISIS_HOTLINES: &[&str] = &["988", "741741", "911"];

/// Fallback replies when no intent matched. `{name}` becomes `", Name"` or nothing.
const FALLBACK_TEMPLATES: &[&str] = &[
    "I want to understand what you're going through{name}. Could you tell me more about how you're feeling?",
    "Thank you for sharing that with me{name}. I'm here to listen and support you.",
    "I hear that something is on your mind{name}. Would you like to talk more about what you're experiencing?",
    "I'm here for you{name}. Sometimes it helps just to have someone listen. What's going on?",
];

/// Picks, personalizes and extends replies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseGenerator {
    personalize_probability: f64,
    follow_up_probability: f64,
}

impl Default for ResponseGenerator {
    fn default() -> Self {
        Self {
            personalize_probability: 0.3,
            follow_up_probability: 0.4,
        }
    }
}

impl From<&EngineConfig> for ResponseGenerator {
    fn from(config: &EngineConfig) -> Self {
        Self {
            personalize_probability: config.personalize_probability,
            follow_up_probability: config.follow_up_probability,
        }
    }
}

impl ResponseGenerator {
    pub fn new(personalize_probability: f64, follow_up_probability: f64) -> Self {
        Self {
            personalize_probability,
            follow_up_probability,
        }
    }

    /// One of [`CRISIS_RESPONSES`], unaltered.
    pub fn crisis_response<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        CRISIS_RESPONSES.choose(rng).copied().unwrap_or(CRISIS_RESPONSES[0])
    }

    /// Reply for a matched intent.
    ///
    /// Random draws happen in a fixed order: response, personalization roll
    /// (only with a name), follow-up roll (only with follow-ups). Crisis
    /// intents get their response verbatim, with no further draws.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        intent: &IntentDefinition,
        user_name: Option<&str>,
        rng: &mut R,
    ) -> String {
        let mut response = intent.responses.choose(rng).cloned().unwrap_or_default();
        if intent.support_type == SupportType::Crisis {
            return response;
        }

        if let Some(name) = known_name(user_name) {
            if rng.gen::<f64>() < self.personalize_probability
                && !response.to_lowercase().contains(&name.to_lowercase())
            {
                response = format!("{}, {}", name, lowercase_first(&response));
            }
        }

        if let Some(questions) = &intent.follow_up_questions {
            if rng.gen::<f64>() < self.follow_up_probability {
                if let Some(question) = questions.choose(rng) {
                    response.push(' ');
                    response.push_str(question);
                }
            }
        }

        response
    }

    /// Empathetic reply when no intent matched.
    pub fn fallback<R: Rng + ?Sized>(&self, user_name: Option<&str>, rng: &mut R) -> String {
        let template = FALLBACK_TEMPLATES.choose(rng).copied().unwrap_or(FALLBACK_TEMPLATES[0]);
        let suffix = known_name(user_name)
            .map(|name| format!(", {}", name))
            .unwrap_or_default();
        template.replace("{name}", &suffix)
    }
}

fn known_name(user_name: Option<&str>) -> Option<&str> {
    user_name.map(str::trim).filter(|n| !n.is_empty())
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
