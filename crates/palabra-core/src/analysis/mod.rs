//! Text analysis: statistics, diversity, comparison, readability, and the
//! full analysis orchestrator.
//!
//! Each metric lives in its own module as a pure function; callers can
//! invoke them individually or run the whole pipeline with
//! [`run_analysis`].

pub mod compare;
pub mod diversity;
pub mod readability;
pub mod reports;
pub mod stats;

pub use reports::AnalysisReport;

use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::{self, FrequencyMap};
use crate::rules::{self, RuleThresholds};
use crate::text;

/// How many tokens the top list carries.
pub const TOP_TOKENS: usize = 10;

/// Run the full analysis pipeline over one text.
///
/// Tokenizes, counts frequencies, evaluates the quality aggregate, computes
/// diversity, and extracts summary sentences. `pattern`, when given, is
/// searched case-insensitively in the token sequence.
///
/// Empty or all-punctuation input is a user-input error, not a degenerate
/// result: no partial bundle is produced.
#[tracing::instrument(skip_all, fields(text_len = text.len(), pattern = ?pattern))]
pub fn run_analysis(
    text: &str,
    pattern: Option<&str>,
    thresholds: &RuleThresholds,
) -> AnalysisResult<AnalysisReport> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let tokens = text::tokenize(text);
    if tokens.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let frequencies = FrequencyMap::from_tokens(&tokens);
    let top_tokens = frequencies.top_n(TOP_TOKENS);
    let summary = frequency::summary_sentences(text, &top_tokens);

    let pattern = pattern.map(str::trim).filter(|p| !p.is_empty());
    let pattern_found = pattern.map(|p| rules::contains_pattern(&tokens, p));

    let quality = rules::evaluate_quality(&tokens, thresholds);
    let diversity = diversity::diversity_of_tokens(&tokens);

    tracing::debug!(
        total = tokens.len(),
        unique = frequencies.len(),
        quality = %quality.quality_label,
        "analysis complete"
    );

    Ok(AnalysisReport {
        total_tokens: tokens.len(),
        unique_tokens: frequencies.len(),
        vowel_start: rules::starts_with_vowel(&tokens),
        top_tokens,
        pattern: pattern.map(str::to_string),
        pattern_found,
        quality,
        diversity,
        summary,
        frequencies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_bundle() {
        let report =
            run_analysis("el gato corre el perro corre", None, &RuleThresholds::default())
                .unwrap();
        assert_eq!(report.total_tokens, 4);
        assert_eq!(report.unique_tokens, 3);
        assert_eq!(report.frequencies.get("corre"), 2);
        assert_eq!(report.top_tokens[0], ("corre".to_string(), 2));
        assert!((report.diversity.type_token_ratio - 0.75).abs() < 1e-12);
        assert!(report.pattern.is_none());
        assert!(report.pattern_found.is_none());
    }

    #[test]
    fn pattern_search() {
        let report = run_analysis(
            "el gato corre",
            Some("GATO"),
            &RuleThresholds::default(),
        )
        .unwrap();
        assert_eq!(report.pattern.as_deref(), Some("GATO"));
        assert_eq!(report.pattern_found, Some(true));

        let report =
            run_analysis("el gato corre", Some("perro"), &RuleThresholds::default()).unwrap();
        assert_eq!(report.pattern_found, Some(false));
    }

    #[test]
    fn blank_pattern_is_ignored() {
        let report =
            run_analysis("el gato corre", Some("  "), &RuleThresholds::default()).unwrap();
        assert!(report.pattern.is_none());
        assert!(report.pattern_found.is_none());
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(matches!(
            run_analysis("", None, &RuleThresholds::default()),
            Err(AnalysisError::EmptyInput)
        ));
        assert!(matches!(
            run_analysis("   \n", None, &RuleThresholds::default()),
            Err(AnalysisError::EmptyInput)
        ));
        // Stopwords and punctuation leave nothing to analyze.
        assert!(matches!(
            run_analysis("el la de... ¿y?", None, &RuleThresholds::default()),
            Err(AnalysisError::EmptyInput)
        ));
    }

    #[test]
    fn bundle_serializes_to_json() {
        let report =
            run_analysis("el gato corre el perro corre", None, &RuleThresholds::default())
                .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_tokens"], 4);
        assert_eq!(json["frequencies"]["corre"], 2);
        assert_eq!(json["top_tokens"][0][0], "corre");
        assert!(json["quality"]["quality_score"].is_number());
        // Absent pattern fields are omitted entirely.
        assert!(json.get("pattern").is_none());
    }
}
