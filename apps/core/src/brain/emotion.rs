//! Emotion detection using keyword tables.
//!
//! Scans normalized tokens against a fixed keyword list per emotion and
//! reports the best category with an intensity in `0.0..=1.0`
//! (matched keywords / keywords in the category).
//!
//! Crisis has priority: any crisis keyword hit makes the result `Crisis`
//! regardless of how the other categories score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::normalizer::{normalize, partial_match};

/// Detected emotional category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Sad,
    Anxious,
    Angry,
    Lonely,
    Hopeful,
    /// Self-harm or suicide language
    Crisis,
}

impl Emotion {
    /// All categories, in tie-break order.
    pub const ALL: [Emotion; 6] = [
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Angry,
        Emotion::Lonely,
        Emotion::Hopeful,
        Emotion::Crisis,
    ];

    /// Returns the lowercase label used in catalogs and replies
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Angry => "angry",
            Emotion::Lonely => "lonely",
            Emotion::Hopeful => "hopeful",
            Emotion::Crisis => "crisis",
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Emotion::Sad => SAD_KEYWORDS,
            Emotion::Anxious => ANXIOUS_KEYWORDS,
            Emotion::Angry => ANGRY_KEYWORDS,
            Emotion::Lonely => LONELY_KEYWORDS,
            Emotion::Hopeful => HOPEFUL_KEYWORDS,
            Emotion::Crisis => CRISIS_KEYWORDS,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Emotion::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown emotion '{}'", s))
    }
}

const SAD_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "down",
    "blue",
    "hopeless",
    "unhappy",
    "miserable",
    "devastated",
];

const ANXIOUS_KEYWORDS: &[&str] = &[
    "anxious",
    "nervous",
    "worried",
    "stressed",
    "panic",
    "overwhelmed",
    "scared",
    "terrified",
];

const ANGRY_KEYWORDS: &[&str] = &[
    "angry",
    "mad",
    "frustrated",
    "irritated",
    "furious",
    "annoyed",
    "pissed",
    "enraged",
];

const LONELY_KEYWORDS: &[&str] = &["lonely", "alone", "isolated", "disconnected", "abandoned", "empty"];

const HOPEFUL_KEYWORDS: &[&str] = &[
    "better",
    "good",
    "happy",
    "hopeful",
    "optimistic",
    "positive",
    "grateful",
];

// Multi-word entries match as phrases, see `keyword_hit`.
const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "hurt myself",
    "end it all",
    "can't go on",
    "cannot go on",
    "want to die",
    "self harm",
    "end my life",
];

/// Result of emotion analysis for a single message
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    /// Winning category, `None` when no keyword matched
    pub emotion: Option<Emotion>,
    /// Matched keywords / keywords in the winning category (0.0 - 1.0)
    pub intensity: f32,
}

impl EmotionAnalysis {
    pub fn is_crisis(&self) -> bool {
        self.emotion == Some(Emotion::Crisis)
    }
}

/// Keyword-table emotion analyzer. Stateless.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmotionAnalyzer;

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze raw text.
    pub fn analyze(&self, text: &str) -> EmotionAnalysis {
        self.analyze_tokens(&normalize(text))
    }

    /// Analyze already-normalized tokens.
    pub fn analyze_tokens(&self, tokens: &[String]) -> EmotionAnalysis {
        if tokens.is_empty() {
            return EmotionAnalysis::default();
        }

        let crisis = category_intensity(Emotion::Crisis, tokens);
        if crisis > 0.0 {
            return EmotionAnalysis {
                emotion: Some(Emotion::Crisis),
                intensity: crisis,
            };
        }

        let mut best = EmotionAnalysis::default();
        for emotion in Emotion::ALL {
            let intensity = category_intensity(emotion, tokens);
            // Strict comparison keeps the earlier category on ties
            if intensity > best.intensity {
                best = EmotionAnalysis {
                    emotion: Some(emotion),
                    intensity,
                };
            }
        }
        best
    }
}

fn category_intensity(emotion: Emotion, tokens: &[String]) -> f32 {
    let keywords = emotion.keywords();
    let hits = keywords.iter().filter(|kw| keyword_hit(kw, tokens)).count();
    hits as f32 / keywords.len() as f32
}

/// Every keyword word uses the loose bidirectional test. Phrases must
/// line up word by word over consecutive tokens ("hurting myself"), or
/// appear collapsed into one token ("killmyself").
fn keyword_hit(keyword: &str, tokens: &[String]) -> bool {
    phrase_forms(keyword).iter().any(|parts| match parts.as_slice() {
        [] => false,
        [single] => tokens.iter().any(|t| partial_match(t, single)),
        _ => {
            let collapsed = parts.concat();
            tokens
                .windows(parts.len())
                .any(|w| w.iter().zip(parts).all(|(token, part)| partial_match(token, part)))
                || tokens.iter().any(|t| t.contains(&collapsed))
        }
    })
}

/// Normalized word lists for a keyword. Contractions also get their
/// apostrophe-less spelling, so "can't" covers both "can t" and "cant".
fn phrase_forms(keyword: &str) -> Vec<Vec<String>> {
    let mut forms = vec![normalize(keyword)];
    if keyword.contains('\'') {
        forms.push(normalize(&keyword.replace('\'', "")));
    }
    forms
}
