//! # Brain Module
//!
//! Rule-based analysis for Kindred. No ML model, just keyword tables and
//! token overlap.
//!
//! ## Components
//! - `normalizer`: lower-casing, punctuation stripping, tokenizing
//! - `emotion`: keyword-table emotion detection with crisis priority
//! - `catalog`: validated intent definitions and the emotion-boost table
//! - `intents`: built-in catalog data
//! - `matcher`: token-overlap intent scoring
//! - `responder`: reply selection, personalization, follow-ups, crisis text

pub mod catalog;
pub mod emotion;
mod intents;
pub mod matcher;
pub mod normalizer;
pub mod responder;

pub use catalog::{IntentCatalog, IntentDefinition};
pub use emotion::{Emotion, EmotionAnalysis, EmotionAnalyzer};
pub use matcher::{IntentMatch, IntentMatcher, KeywordIntentMatcher, MatchWeights};
pub use normalizer::{normalize, partial_match};
pub use responder::{ResponseGenerator, CRISIS_HOTLINES, CRISIS_RESPONSES};
