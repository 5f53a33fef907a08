//! Rule engine: boolean predicates over token sequences and their
//! frequency distributions, plus the fixed quality aggregate.
//!
//! Every predicate is pure and total: on an empty token sequence each rule
//! evaluates to a definite `false` (the vacuous case), never an error.
//!
//! [`evaluate_quality`] wires six of the nine predicates into the score the
//! tool exposes to end users. Keyword-density, frequency-range, and
//! topical-coherence remain library-only predicates; that curation is kept
//! as-is from the product the scoring was calibrated against.

use serde::{Deserialize, Serialize};

use crate::dictionaries::academic::ACADEMIC_WORDS;
use crate::frequency::FrequencyMap;

/// Default minimum token length for the min-length rule.
pub const DEFAULT_MIN_LENGTH: usize = 3;
/// Default minimum keyword density for the density rule.
pub const DEFAULT_MIN_DENSITY: f64 = 0.01;
/// Default repetition ceiling for the standalone repetition rule.
pub const DEFAULT_REPETITION_CEILING: usize = 5;
/// Default frequency range for the frequency-range rule.
pub const DEFAULT_FREQUENCY_RANGE: (usize, usize) = (2, 50);
/// Default unique-token floor for the diversity rule.
pub const DEFAULT_MIN_UNIQUE: usize = 20;
/// Repetition ceiling used inside the quality aggregate. Looser than the
/// standalone default: the aggregate flags plagiarism-level repetition, not
/// ordinary emphasis.
pub const AGGREGATE_REPETITION_CEILING: usize = 10;

/// Thresholds for the quality aggregate, passed explicitly per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Minimum token length for the min-length rule.
    pub min_length: usize,
    /// Unique-token floor for the diversity rule.
    pub min_unique: usize,
    /// A token repeated more than this many times fails the
    /// no-excessive-repetition rule.
    pub repetition_ceiling: usize,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            min_unique: DEFAULT_MIN_UNIQUE,
            repetition_ceiling: AGGREGATE_REPETITION_CEILING,
        }
    }
}

const VOWELS: &str = "aeiou";
const CONSONANTS: &str = "bcdfghjklmnñpqrstvwxyz";

/// Any token starts with a vowel.
pub fn starts_with_vowel(tokens: &[String]) -> bool {
    tokens
        .iter()
        .filter_map(|t| t.chars().next())
        .any(|c| VOWELS.contains(c.to_lowercase().next().unwrap_or(c)))
}

/// Any non-empty token starts with a consonant.
pub fn starts_with_consonant(tokens: &[String]) -> bool {
    tokens
        .iter()
        .filter_map(|t| t.chars().next())
        .any(|c| CONSONANTS.contains(c.to_lowercase().next().unwrap_or(c)))
}

/// Any token has at least `min` characters.
pub fn has_min_length(tokens: &[String], min: usize) -> bool {
    tokens.iter().any(|t| t.chars().count() >= min)
}

/// The keyword reaches the given density (occurrences / token count).
/// Vacuously false for an empty sequence.
pub fn meets_keyword_density(tokens: &[String], keyword: &str, min_density: f64) -> bool {
    if tokens.is_empty() {
        return false;
    }
    crate::frequency::keyword_density(tokens, keyword) >= min_density
}

/// Some token occurs more than `ceiling` times.
pub fn has_excessive_repetition(freqs: &FrequencyMap, ceiling: usize) -> bool {
    freqs.counts().any(|c| c > ceiling)
}

/// Some token's count lies within `[min, max]`.
pub fn has_frequency_in_range(freqs: &FrequencyMap, min: usize, max: usize) -> bool {
    freqs.counts().any(|c| (min..=max).contains(&c))
}

/// At least `min_unique` distinct tokens.
pub fn has_min_diversity(tokens: &[String], min_unique: usize) -> bool {
    let unique: std::collections::HashSet<&str> = tokens.iter().map(String::as_str).collect();
    unique.len() >= min_unique
}

/// At least three of the topic words appear in the vocabulary.
pub fn has_topical_coherence(tokens: &[String], topic_words: &[String]) -> bool {
    let vocabulary: std::collections::HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let matches = topic_words
        .iter()
        .filter(|w| vocabulary.contains(w.as_str()))
        .count();
    matches >= 3
}

/// The vocabulary intersects the academic marker set.
pub fn uses_academic_language(tokens: &[String]) -> bool {
    tokens.iter().any(|t| ACADEMIC_WORDS.contains(t.as_str()))
}

/// The token sequence contains the pattern (case-insensitive exact match).
pub fn contains_pattern(tokens: &[String], pattern: &str) -> bool {
    let pattern = pattern.to_lowercase();
    tokens.iter().any(|t| *t == pattern)
}

/// Quality tier derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    /// Score ≥ 0.7.
    High,
    /// Score ≥ 0.4.
    Medium,
    /// Everything below.
    Low,
}

impl QualityLabel {
    /// Map a score in [0, 1] to its tier. The thresholds are inclusive:
    /// exactly 0.7 is High, exactly 0.4 is Medium.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// The tier as a display string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the fixed six-rule quality aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Some token starts with a vowel.
    pub vowel_start: bool,
    /// Some token starts with a consonant.
    pub consonant_start: bool,
    /// Some token meets the minimum length.
    pub min_length: bool,
    /// The vocabulary meets the unique-token floor.
    pub diversity: bool,
    /// Academic marker words are present.
    pub academic_language: bool,
    /// No token exceeds the repetition ceiling.
    pub no_excessive_repetition: bool,
    /// Fraction of rules satisfied, in [0, 1].
    pub quality_score: f64,
    /// Tier label for the score.
    pub quality_label: QualityLabel,
}

/// Evaluate the fixed six-rule quality aggregate.
///
/// All six rules are evaluated even on an empty sequence, where the five
/// presence rules are vacuously false and no-excessive-repetition is
/// vacuously true.
#[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
pub fn evaluate_quality(tokens: &[String], thresholds: &RuleThresholds) -> QualityReport {
    let freqs = FrequencyMap::from_tokens(tokens);

    let vowel_start = starts_with_vowel(tokens);
    let consonant_start = starts_with_consonant(tokens);
    let min_length = has_min_length(tokens, thresholds.min_length);
    let diversity = has_min_diversity(tokens, thresholds.min_unique);
    let academic_language = uses_academic_language(tokens);
    let no_excessive_repetition =
        !has_excessive_repetition(&freqs, thresholds.repetition_ceiling);

    let passed = [
        vowel_start,
        consonant_start,
        min_length,
        diversity,
        academic_language,
        no_excessive_repetition,
    ]
    .iter()
    .filter(|v| **v)
    .count();
    let quality_score = passed as f64 / 6.0;

    QualityReport {
        vowel_start,
        consonant_start,
        min_length,
        diversity,
        academic_language,
        no_excessive_repetition,
        quality_score,
        quality_label: QualityLabel::from_score(quality_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn vowel_and_consonant_starts() {
        let tokens = toks(&["gato", "oso"]);
        assert!(starts_with_vowel(&tokens));
        assert!(starts_with_consonant(&tokens));

        assert!(!starts_with_vowel(&toks(&["gato"])));
        assert!(!starts_with_consonant(&toks(&["oso"])));
        assert!(starts_with_consonant(&toks(&["ñandú"])));
    }

    #[test]
    fn min_length_rule() {
        assert!(has_min_length(&toks(&["no", "gato"]), 3));
        assert!(!has_min_length(&toks(&["no", "si"]), 3));
    }

    #[test]
    fn density_rule() {
        let tokens = toks(&["gato", "perro", "gato"]);
        assert!(meets_keyword_density(&tokens, "gato", 0.5));
        assert!(!meets_keyword_density(&tokens, "perro", 0.5));
        assert!(!meets_keyword_density(&[], "gato", 0.01));
    }

    #[test]
    fn repetition_and_range_rules() {
        let tokens = toks(&["a", "a", "a", "b"]);
        let freqs = FrequencyMap::from_tokens(&tokens);
        assert!(has_excessive_repetition(&freqs, 2));
        assert!(!has_excessive_repetition(&freqs, 3));
        assert!(has_frequency_in_range(&freqs, 2, 50));
        assert!(!has_frequency_in_range(&freqs, 4, 50));
    }

    #[test]
    fn diversity_rule() {
        let tokens = toks(&["a", "b", "c", "a"]);
        assert!(has_min_diversity(&tokens, 3));
        assert!(!has_min_diversity(&tokens, 4));
    }

    #[test]
    fn topical_coherence_needs_three_matches() {
        let tokens = toks(&["sol", "luna", "estrella", "gato"]);
        let topic = toks(&["sol", "luna", "estrella", "planeta"]);
        assert!(has_topical_coherence(&tokens, &topic));
        assert!(!has_topical_coherence(&toks(&["sol", "luna"]), &topic));
    }

    #[test]
    fn academic_rule() {
        assert!(uses_academic_language(&toks(&["gato", "hipótesis"])));
        assert!(!uses_academic_language(&toks(&["gato", "perro"])));
    }

    #[test]
    fn pattern_search_is_case_insensitive() {
        let tokens = toks(&["gato", "corre"]);
        assert!(contains_pattern(&tokens, "GATO"));
        assert!(!contains_pattern(&tokens, "perro"));
    }

    #[test]
    fn empty_input_gives_definite_booleans() {
        let report = evaluate_quality(&[], &RuleThresholds::default());
        assert!(!report.vowel_start);
        assert!(!report.consonant_start);
        assert!(!report.min_length);
        assert!(!report.diversity);
        assert!(!report.academic_language);
        // Vacuously true: nothing repeats in an empty sequence.
        assert!(report.no_excessive_repetition);
        assert!((report.quality_score - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(report.quality_label, QualityLabel::Low);
    }

    #[test]
    fn score_is_a_sixth_multiple() {
        let tokens = toks(&["investigación", "oso", "gato", "perro", "sol"]);
        let report = evaluate_quality(&tokens, &RuleThresholds::default());
        let sixths = report.quality_score * 6.0;
        assert!((sixths - sixths.round()).abs() < 1e-9);
        // vowel, consonant, min-length, academic, no-repetition pass;
        // diversity (20 unique) fails.
        assert!((report.quality_score - 5.0 / 6.0).abs() < 1e-12);
        assert_eq!(report.quality_label, QualityLabel::High);
    }

    #[test]
    fn label_thresholds_are_exact() {
        assert_eq!(QualityLabel::from_score(0.7), QualityLabel::High);
        assert_eq!(QualityLabel::from_score(0.699_99), QualityLabel::Medium);
        assert_eq!(QualityLabel::from_score(0.4), QualityLabel::Medium);
        assert_eq!(QualityLabel::from_score(0.399_99), QualityLabel::Low);
        assert_eq!(QualityLabel::from_score(0.0), QualityLabel::Low);
        assert_eq!(QualityLabel::from_score(1.0), QualityLabel::High);
    }

    #[test]
    fn custom_thresholds() {
        let tokens = toks(&["a", "b", "a"]);
        let thresholds = RuleThresholds {
            min_length: 1,
            min_unique: 2,
            repetition_ceiling: 1,
        };
        let report = evaluate_quality(&tokens, &thresholds);
        assert!(report.min_length);
        assert!(report.diversity);
        assert!(!report.no_excessive_repetition);
    }
}
