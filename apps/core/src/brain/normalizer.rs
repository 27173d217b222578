//! Text normalization.
//!
//! Lower-cases input, replaces every non-word, non-space character with a
//! space and splits on whitespace. Used by both the emotion analyzer and the
//! intent matcher so that patterns and user input are tokenized identically.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the pattern is a compile-time constant.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex: punctuation pattern"));

/// Normalize text into lowercase word tokens.
///
/// Empty or punctuation-only input yields an empty vector.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    PUNCTUATION
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Shortest token allowed to match as a substring of a longer word.
pub const MIN_CONTAINED_LEN: usize = 3;

/// Bidirectional substring test shared by emotion and intent scoring.
///
/// `"sadness"` matches `"sad"` and `"sad"` matches `"sadness"`. The shorter
/// side must be at least [`MIN_CONTAINED_LEN`] characters unless both are
/// equal, so `"i"` only matches `"i"` and never `"anxious"`. Still loose:
/// `"are"` matches `"scared"`.
pub fn partial_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    (b.chars().count() >= MIN_CONTAINED_LEN && a.contains(b))
        || (a.chars().count() >= MIN_CONTAINED_LEN && b.contains(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("I feel SAD, today!"), vec!["i", "feel", "sad", "today"]);
    }

    #[test]
    fn test_apostrophes_split_words() {
        assert_eq!(normalize("I'm fine"), vec!["i", "m", "fine"]);
        assert_eq!(normalize("can't go on"), vec!["can", "t", "go", "on"]);
    }

    #[test]
    fn test_empty_and_punctuation_only() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("?!... ,;").is_empty());
    }

    #[test]
    fn test_underscore_is_a_word_character() {
        assert_eq!(normalize("feeling_sad"), vec!["feeling_sad"]);
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["Hello, World!", "  what's   up?? ", "I'm thinking about it...", "ÉTÉ déjà"];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once.join(" "));
            assert_eq!(once, twice, "normalization not idempotent for '{}'", input);
        }
    }

    #[test]
    fn test_partial_match_both_directions() {
        assert!(partial_match("sadness", "sad"));
        assert!(partial_match("sad", "sadness"));
        assert!(partial_match("hi", "hi"));
        assert!(!partial_match("happy", "sad"));
    }

    #[test]
    fn test_short_tokens_need_exact_match() {
        assert!(partial_match("i", "i"));
        assert!(!partial_match("i", "anxious"));
        assert!(!partial_match("hi", "thinking"));
        assert!(partial_match("are", "scared"));
    }
}
