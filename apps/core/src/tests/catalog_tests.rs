//! Catalog Loading Tests
//!
//! JSON catalogs on disk, validation failures and extension of the
//! built-in catalog.

use crate::brain::{Emotion, IntentCatalog};
use crate::error::AppError;
use crate::models::SupportType;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(json.as_bytes()).expect("Failed to write catalog");
    file
}

const STUDY_CATALOG: &str = r#"{
    "intents": [
        {
            "tag": "exam_stress",
            "patterns": ["exams are coming", "I have a test tomorrow"],
            "responses": ["Exams can be a lot. What subject is on your mind?"],
            "support_type": "emotional",
            "follow_up_questions": ["How have you been preparing?"]
        },
        {
            "tag": "study_tips",
            "patterns": ["how do I study", "study tips"],
            "responses": ["Short sessions with breaks tend to work well."]
        }
    ],
    "emotion_boosts": { "anxious": ["exam_stress"] }
}"#;

#[cfg(test)]
mod json_loading_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let file = write_catalog(STUDY_CATALOG);
        let catalog = IntentCatalog::from_json_file(file.path()).expect("catalog loads");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.intents()[0].tag, "exam_stress");
        assert!(catalog.is_boosted(Emotion::Anxious, "exam_stress"));
        assert!(!catalog.is_boosted(Emotion::Sad, "exam_stress"));
    }

    #[test]
    fn test_support_type_defaults_to_informational() {
        let catalog = IntentCatalog::from_json_str(STUDY_CATALOG).expect("catalog loads");
        let tips = catalog.get("study_tips").expect("study_tips");

        assert_eq!(tips.support_type, SupportType::Informational);
        assert!(tips.follow_up_questions.is_none());
    }

    #[test]
    fn test_boosts_derived_when_absent() {
        let json = r#"{
            "intents": [
                { "tag": "feeling_lonely", "patterns": ["no friends"], "responses": ["I'm here."] },
                { "tag": "small_talk", "patterns": ["nice weather"], "responses": ["It is!"] }
            ]
        }"#;
        let catalog = IntentCatalog::from_json_str(json).expect("catalog loads");

        assert!(catalog.is_boosted(Emotion::Lonely, "feeling_lonely"));
        assert_eq!(catalog.emotion_boosts().len(), 1);
    }

    #[test]
    fn test_explicit_empty_boosts_stay_empty() {
        let json = r#"{
            "intents": [
                { "tag": "feeling_sad", "patterns": ["so down"], "responses": ["I'm sorry."] }
            ],
            "emotion_boosts": {}
        }"#;
        let catalog = IntentCatalog::from_json_str(json).expect("catalog loads");
        assert!(catalog.emotion_boosts().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = IntentCatalog::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let file = write_catalog("{ \"intents\": [ ");
        let result = IntentCatalog::from_json_file(file.path());
        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn test_unknown_emotion_key_is_rejected() {
        let json = r#"{
            "intents": [ { "tag": "a", "patterns": ["x"], "responses": ["y"] } ],
            "emotion_boosts": { "bored": ["a"] }
        }"#;
        assert!(matches!(IntentCatalog::from_json_str(json), Err(AppError::Json(_))));
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn assert_rejected(json: &str, needle: &str) {
        match IntentCatalog::from_json_str(json) {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains(needle), "'{}' does not mention '{}'", msg, needle)
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_responses() {
        assert_rejected(
            r#"{ "intents": [ { "tag": "mute", "patterns": ["x"], "responses": [] } ] }"#,
            "mute",
        );
    }

    #[test]
    fn test_empty_patterns() {
        assert_rejected(
            r#"{ "intents": [ { "tag": "deaf", "patterns": [], "responses": ["y"] } ] }"#,
            "deaf",
        );
    }

    #[test]
    fn test_blank_response() {
        assert_rejected(
            r#"{ "intents": [ { "tag": "blank", "patterns": ["x"], "responses": ["  "] } ] }"#,
            "blank",
        );
    }

    #[test]
    fn test_empty_follow_up_list() {
        assert_rejected(
            r#"{ "intents": [ { "tag": "ask", "patterns": ["x"], "responses": ["y"], "follow_up_questions": [] } ] }"#,
            "ask",
        );
    }

    #[test]
    fn test_duplicate_tag() {
        assert_rejected(
            r#"{ "intents": [
                { "tag": "twice", "patterns": ["x"], "responses": ["y"] },
                { "tag": "twice", "patterns": ["z"], "responses": ["w"] }
            ] }"#,
            "duplicate intent tag 'twice'",
        );
    }

    #[test]
    fn test_boost_for_unknown_tag() {
        assert_rejected(
            r#"{
                "intents": [ { "tag": "a", "patterns": ["x"], "responses": ["y"] } ],
                "emotion_boosts": { "sad": ["ghost"] }
            }"#,
            "ghost",
        );
    }
}

#[cfg(test)]
mod extend_tests {
    use super::*;

    #[test]
    fn test_extend_appends_after_builtin() {
        let extra = IntentCatalog::from_json_str(STUDY_CATALOG).expect("catalog loads");
        let catalog = IntentCatalog::builtin().extend(extra).expect("no clashes");

        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.intents()[0].tag, "definition");
        assert_eq!(catalog.intents()[16].tag, "exam_stress");
        assert!(catalog.is_boosted(Emotion::Anxious, "feeling_anxious"));
        assert!(catalog.is_boosted(Emotion::Anxious, "exam_stress"));
    }

    #[test]
    fn test_extend_rejects_clashing_tag() {
        let json = r#"{ "intents": [ { "tag": "greeting", "patterns": ["yo"], "responses": ["Yo!"] } ] }"#;
        let extra = IntentCatalog::from_json_str(json).expect("catalog loads");

        let result = IntentCatalog::builtin().extend(extra);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_extended_catalog_is_matchable() {
        use crate::brain::KeywordIntentMatcher;
        use std::sync::Arc;

        let extra = IntentCatalog::from_json_str(STUDY_CATALOG).expect("catalog loads");
        let catalog = IntentCatalog::builtin().extend(extra).expect("no clashes");
        let matcher = KeywordIntentMatcher::new(Arc::new(catalog));

        let tag = matcher.match_text("study tips please").map(|m| m.intent.tag.clone());
        assert_eq!(tag.as_deref(), Some("study_tips"));
    }
}
