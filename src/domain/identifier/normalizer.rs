// src/domain/identifier/normalizer.rs
//! Turns free-form text into an ordered list of candidate identifiers.
//!
//! Each stage derives one more candidate from the previous one, so the list
//! runs from the most literal rendering to the most stripped-down one. Every
//! candidate only contains `[A-Za-z0-9_-]`.

use super::config::GenerationConfig;
use super::value_objects::SuggestInput;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"['"#$,.!?%@()]+"##).expect("punctuation regex must compile")
});

static STOP_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:at|de|und|the|a|of|un[aeo]?|les?|la|in)\b")
        .expect("stop word regex must compile")
});

// Dashes are non-word characters too, so dash runs collapse with everything else.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("non-word regex must compile"));

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("digit regex must compile"));

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_]+").expect("separator regex must compile"));

/// Candidate generator bound to one configuration's disposable words.
pub struct Normalizer<'a> {
    disposable: &'a [Regex],
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self {
            disposable: config.disposable_patterns(),
        }
    }

    /// Returns distinct, non-empty candidates, most literal first.
    pub fn candidates(&self, input: SuggestInput) -> Vec<String> {
        let source = input.into_text();
        if source.is_empty() {
            return Vec::new();
        }

        let lowered = source.to_ascii_lowercase();
        let stripped = PUNCTUATION.replace_all(&lowered, "");

        let mut stages = vec![cleanup(&stripped)];
        push_stage(&mut stages, |s| STOP_WORDS.replace_all(s, "-").into_owned());
        for pattern in self.disposable {
            push_stage(&mut stages, |s| pattern.replace_all(s, "").into_owned());
        }
        push_stage(&mut stages, |s| DIGITS.replace_all(s, "-").into_owned());
        push_stage(&mut stages, |s| SEPARATORS.replace_all(s, "").into_owned());

        let mut seen = HashSet::new();
        let candidates: Vec<String> = stages
            .into_iter()
            .filter(|candidate| !candidate.is_empty() && seen.insert(candidate.clone()))
            .collect();

        for candidate in &candidates {
            tracing::debug!(candidate = %candidate, "potential identifier");
        }

        candidates
    }
}

/// Convenience wrapper around [`Normalizer::candidates`].
pub fn normalize(input: impl Into<SuggestInput>, config: &GenerationConfig) -> Vec<String> {
    Normalizer::new(config).candidates(input.into())
}

/// Derives the next stage from the most recent one.
fn push_stage(stages: &mut Vec<String>, transform: impl FnOnce(&str) -> String) {
    let previous = stages.last().map(String::as_str).unwrap_or_default();
    let next = cleanup(&transform(previous));
    stages.push(next);
}

/// Collapses non-word runs into single dashes and trims one dash from each end.
fn cleanup(value: &str) -> String {
    let dashed = NON_WORD.replace_all(value, "-");
    let trimmed = dashed.strip_prefix('-').unwrap_or(&dashed);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::identifier::config::DisposableMode;

    fn plain() -> GenerationConfig {
        GenerationConfig::default()
    }

    fn allowed(candidate: &str) -> bool {
        !candidate.is_empty()
            && candidate
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    #[test]
    fn cleanup_collapses_and_trims() {
        assert_eq!(cleanup("/urltitle/"), "urltitle");
        assert_eq!(cleanup("a  --  b"), "a-b");
        assert_eq!(cleanup("-"), "");
        assert_eq!(cleanup("snake_case"), "snake_case");
    }

    #[test]
    fn stages_run_from_literal_to_stripped() {
        assert_eq!(
            normalize("My new title", &plain()),
            vec!["my-new-title".to_string(), "mynewtitle".to_string()]
        );
    }

    #[test]
    fn stop_words_are_dropped_case_insensitively() {
        let candidates = normalize("The Lord of the Rings", &plain());
        assert_eq!(candidates[0], "the-lord-of-the-rings");
        assert_eq!(candidates[1], "lord-rings");
        assert_eq!(candidates.last().unwrap(), "lordrings");
    }

    #[test]
    fn disposable_words_add_one_stage_each() {
        let config = GenerationConfig::builder()
            .disposable_words(["high", "school"])
            .build()
            .unwrap();
        let candidates = normalize("Springfield High School 2024", &config);
        assert_eq!(
            candidates,
            vec![
                "springfield-high-school-2024".to_string(),
                "springfield-school-2024".to_string(),
                "springfield-2024".to_string(),
                "springfield".to_string(),
            ]
        );
    }

    #[test]
    fn disposable_words_match_whole_words_only() {
        let config = GenerationConfig::builder()
            .disposable_words(["prep"])
            .build()
            .unwrap();
        let candidates = normalize("preparatory prep", &config);
        assert_eq!(candidates[0], "preparatory-prep");
        assert_eq!(candidates[1], "preparatory");
    }

    #[test]
    fn disposable_patterns_versus_literals() {
        let pattern = GenerationConfig::builder()
            .disposable_words(["prep(aratory)?"])
            .build()
            .unwrap();
        assert_eq!(
            normalize("preparatory school", &pattern).last().unwrap(),
            "school"
        );

        let literal = GenerationConfig::builder()
            .disposable_words(["prep(aratory)?"])
            .disposable_mode(DisposableMode::Literal)
            .build()
            .unwrap();
        assert_eq!(
            normalize("preparatory school", &literal).last().unwrap(),
            "preparatoryschool"
        );
    }

    #[test]
    fn digits_only_input_keeps_its_digits() {
        assert_eq!(normalize("123", &plain()), vec!["123".to_string()]);
    }

    #[test]
    fn empty_input_has_no_candidates() {
        assert!(normalize("", &plain()).is_empty());
        assert!(normalize(Vec::<String>::new(), &plain()).is_empty());
        assert!(normalize("?!", &plain()).is_empty());
    }

    #[test]
    fn wacky_characters_stay_url_safe() {
        for text in [
            "Title",
            "Title and some spaces",
            "Title-with-dashes",
            "Title-with'-$#)(*%symbols",
            "/urltitle/",
            "calculé en française",
            "123",
            "tabs\tand\nnewlines",
            "ÅNGSTRÖM ~ über_cool",
        ] {
            let candidates = normalize(text, &plain());
            assert!(!candidates.is_empty(), "no candidates for {text:?}");
            for candidate in candidates {
                assert!(allowed(&candidate), "{candidate:?} from {text:?}");
            }
        }
    }

    #[test]
    fn output_is_deterministic() {
        let config = GenerationConfig::builder()
            .disposable_words(["school"])
            .build()
            .unwrap();
        let first = normalize("My new school title", &config);
        let second = normalize("My new school title", &config);
        assert_eq!(first, second);
    }
}
