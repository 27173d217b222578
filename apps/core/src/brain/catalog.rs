//! Intent catalog.
//!
//! An ordered, validated set of [`IntentDefinition`]s plus the explicit
//! emotion-boost table used by the matcher. Built once and shared
//! read-only (`Arc<IntentCatalog>`) for the lifetime of the process.
//!
//! Catalogs can come from the built-in data or from a JSON file:
//!
//! ```json
//! {
//!   "intents": [
//!     { "tag": "greeting", "patterns": ["hi"], "responses": ["Hello!"],
//!       "support_type": "emotional", "follow_up_questions": ["How are you?"] }
//!   ],
//!   "emotion_boosts": { "sad": ["feeling_sad"] }
//! }
//! ```
//!
//! When `emotion_boosts` is omitted, it is derived once at load time from
//! tags that contain an emotion label (`feeling_sad` contains `sad`).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;
use validator::Validate;

use super::emotion::Emotion;
use super::intents::{BUILTIN_EMOTION_BOOSTS, BUILTIN_INTENTS};
use crate::error::AppError;
use crate::models::SupportType;

/// A predefined category of user input paired with canned responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct IntentDefinition {
    /// Unique short identifier.
    #[validate(length(min = 1))]
    pub tag: String,
    /// Example phrases, used only as matching material.
    #[validate(length(min = 1))]
    pub patterns: Vec<String>,
    /// Candidate replies; one is picked at random.
    #[validate(length(min = 1))]
    pub responses: Vec<String>,
    #[serde(default)]
    pub support_type: SupportType,
    /// Optional clarifying questions appended to some replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
}

impl IntentDefinition {
    fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::Validation(format!("intent '{}': {}", self.tag, e)))?;

        if self.tag.trim().is_empty() {
            return Err(AppError::Validation("intent tag must not be blank".to_string()));
        }
        if self.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(AppError::Validation(format!("intent '{}' has a blank response", self.tag)));
        }
        if let Some(questions) = &self.follow_up_questions {
            if questions.is_empty() || questions.iter().any(|q| q.trim().is_empty()) {
                return Err(AppError::Validation(format!(
                    "intent '{}' has an empty follow-up question list or a blank question",
                    self.tag
                )));
            }
        }
        Ok(())
    }
}

/// On-disk catalog shape
#[derive(Debug, Deserialize)]
struct CatalogFile {
    intents: Vec<IntentDefinition>,
    #[serde(default)]
    emotion_boosts: Option<BTreeMap<Emotion, Vec<String>>>,
}

/// Validated, ordered intent collection.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentCatalog {
    intents: Vec<IntentDefinition>,
    emotion_boosts: BTreeMap<Emotion, Vec<String>>,
}

impl IntentCatalog {
    /// Builds a catalog, rejecting anything that would break matching or
    /// response generation later.
    pub fn new(
        intents: Vec<IntentDefinition>,
        emotion_boosts: BTreeMap<Emotion, Vec<String>>,
    ) -> Result<Self, AppError> {
        let mut tags = HashSet::new();
        for intent in &intents {
            intent.check()?;
            if !tags.insert(intent.tag.as_str()) {
                return Err(AppError::Validation(format!("duplicate intent tag '{}'", intent.tag)));
            }
        }

        for (emotion, boosted) in &emotion_boosts {
            if let Some(missing) = boosted.iter().find(|t| !tags.contains(t.as_str())) {
                return Err(AppError::Validation(format!(
                    "emotion '{}' boosts unknown intent '{}'",
                    emotion, missing
                )));
            }
        }

        Ok(Self {
            intents,
            emotion_boosts,
        })
    }

    /// The built-in mental-health support catalog.
    pub fn builtin() -> Self {
        let intents = BUILTIN_INTENTS
            .iter()
            .map(|b| IntentDefinition {
                tag: b.tag.to_string(),
                patterns: b.patterns.iter().map(|p| p.to_string()).collect(),
                responses: b.responses.iter().map(|r| r.to_string()).collect(),
                support_type: b.support_type,
                follow_up_questions: (!b.follow_up_questions.is_empty())
                    .then(|| b.follow_up_questions.iter().map(|q| q.to_string()).collect()),
            })
            .collect();

        let boosts = BUILTIN_EMOTION_BOOSTS
            .iter()
            .map(|(emotion, tags)| (*emotion, tags.iter().map(|t| t.to_string()).collect()))
            .collect();

        // NOTE: expect() is acceptable here, the built-in data is covered by tests.
        Self::new(intents, boosts).expect("built-in intent catalog is invalid")
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let boosts = match file.emotion_boosts {
            Some(boosts) => boosts,
            None => derive_boosts_from_tags(&file.intents),
        };
        Self::new(file.intents, boosts)
    }

    /// Reads and parses a catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} intents from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Appends another catalog's intents and boosts after this one's.
    pub fn extend(self, other: IntentCatalog) -> Result<Self, AppError> {
        let mut intents = self.intents;
        intents.extend(other.intents);

        let mut boosts = self.emotion_boosts;
        for (emotion, tags) in other.emotion_boosts {
            let entry = boosts.entry(emotion).or_default();
            for tag in tags {
                if !entry.contains(&tag) {
                    entry.push(tag);
                }
            }
        }

        Self::new(intents, boosts)
    }

    pub fn intents(&self) -> &[IntentDefinition] {
        &self.intents
    }

    pub fn get(&self, tag: &str) -> Option<&IntentDefinition> {
        self.intents.iter().find(|i| i.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Whether `emotion` boosts the intent tagged `tag`.
    pub fn is_boosted(&self, emotion: Emotion, tag: &str) -> bool {
        self.emotion_boosts
            .get(&emotion)
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    pub fn emotion_boosts(&self) -> &BTreeMap<Emotion, Vec<String>> {
        &self.emotion_boosts
    }
}

impl Default for IntentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn derive_boosts_from_tags(intents: &[IntentDefinition]) -> BTreeMap<Emotion, Vec<String>> {
    Emotion::ALL
        .into_iter()
        .filter_map(|emotion| {
            let tags: Vec<String> = intents
                .iter()
                .filter(|i| i.tag.contains(emotion.label()))
                .map(|i| i.tag.clone())
                .collect();
            (!tags.is_empty()).then_some((emotion, tags))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = IntentCatalog::builtin();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.intents()[0].tag, "definition");
        assert_eq!(catalog.get("crisis_help").map(|i| i.support_type), Some(SupportType::Crisis));
        assert!(catalog.get("greeting").is_some_and(|i| i.follow_up_questions.is_none()));
    }

    #[test]
    fn test_builtin_boosts_match_tag_convention() {
        let catalog = IntentCatalog::builtin();
        assert_eq!(catalog.emotion_boosts(), &derive_boosts_from_tags(catalog.intents()));
        assert!(catalog.is_boosted(Emotion::Sad, "feeling_sad"));
        assert!(catalog.is_boosted(Emotion::Crisis, "crisis_help"));
        assert!(!catalog.is_boosted(Emotion::Hopeful, "feeling_better"));
    }

    #[test]
    fn test_every_builtin_intent_is_well_formed() {
        for intent in IntentCatalog::builtin().intents() {
            assert!(!intent.patterns.is_empty(), "{} has no patterns", intent.tag);
            assert!(!intent.responses.is_empty(), "{} has no responses", intent.tag);
        }
    }
}
