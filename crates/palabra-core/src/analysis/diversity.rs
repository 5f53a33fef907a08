//! Lexical diversity: type-token ratio and Shannon entropy.

use crate::frequency::FrequencyMap;
use crate::text;

use super::reports::DiversityReport;

/// Additive epsilon inside the entropy logarithm. Avoids `log2(0)` at the
/// cost of a slight upward bias in the result; accepted as an approximation
/// since probabilities here are never smaller than 1/total.
const ENTROPY_EPSILON: f64 = 1e-10;

/// Compute diversity metrics for a text through the full tokenization
/// pipeline. Empty input yields zeros across the board, not an error.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn lexical_diversity(text: &str) -> DiversityReport {
    let tokens = text::tokenize(text);
    diversity_of_tokens(&tokens)
}

/// Diversity metrics for an already-tokenized sequence.
pub fn diversity_of_tokens(tokens: &[String]) -> DiversityReport {
    let total = tokens.len();
    let freqs = FrequencyMap::from_tokens(tokens);
    let unique = freqs.len();

    let type_token_ratio = if total == 0 {
        0.0
    } else {
        unique as f64 / total as f64
    };

    let shannon_entropy = if total == 0 {
        0.0
    } else {
        -freqs
            .counts()
            .map(|c| {
                let p = c as f64 / total as f64;
                p * (p + ENTROPY_EPSILON).log2()
            })
            .sum::<f64>()
    };

    DiversityReport {
        total_tokens: total,
        unique_tokens: unique,
        type_token_ratio,
        shannon_entropy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_ttr() {
        // "el" is a stopword: tokens = [gato, corre, perro, corre]
        let report = lexical_diversity("el gato corre el perro corre");
        assert_eq!(report.total_tokens, 4);
        assert_eq!(report.unique_tokens, 3);
        assert!((report.type_token_ratio - 0.75).abs() < 1e-12);
    }

    #[test]
    fn ttr_bounds() {
        let report = lexical_diversity("gato gato gato");
        assert!(report.type_token_ratio > 0.0 && report.type_token_ratio <= 1.0);
    }

    #[test]
    fn empty_input_is_defined() {
        let report = lexical_diversity("");
        assert_eq!(report.total_tokens, 0);
        assert_eq!(report.unique_tokens, 0);
        assert_eq!(report.type_token_ratio, 0.0);
        assert_eq!(report.shannon_entropy, 0.0);
    }

    #[test]
    fn uniform_distribution_entropy() {
        // Four equally likely tokens → entropy ≈ 2 bits (epsilon shifts it
        // by far less than the tolerance).
        let tokens: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let report = diversity_of_tokens(&tokens);
        assert!((report.shannon_entropy - 2.0).abs() < 1e-6);
    }

    #[test]
    fn single_token_entropy_is_near_zero() {
        let tokens: Vec<String> = vec!["gato".to_string(); 5];
        let report = diversity_of_tokens(&tokens);
        assert!(report.shannon_entropy.abs() < 1e-6);
    }
}
