//! Cross-text vocabulary comparison.

use std::collections::BTreeSet;

use crate::text;

use super::reports::ComparisonReport;

/// How many example tokens each sample list carries.
const SAMPLE_SIZE: usize = 10;

/// Compare the vocabularies of two texts.
///
/// Jaccard similarity is |A ∩ B| / |A ∪ B|, 0 when the union is empty.
/// Sample lists are sorted lexically so results are reproducible; the
/// counts cover the full sets, not just the samples.
#[tracing::instrument(skip_all, fields(a_len = text_a.len(), b_len = text_b.len()))]
pub fn compare_texts(text_a: &str, text_b: &str) -> ComparisonReport {
    let vocab_a: BTreeSet<String> = text::tokenize(text_a).into_iter().collect();
    let vocab_b: BTreeSet<String> = text::tokenize(text_b).into_iter().collect();

    let common: Vec<String> = vocab_a.intersection(&vocab_b).cloned().collect();
    let only_a: Vec<String> = vocab_a.difference(&vocab_b).cloned().collect();
    let only_b: Vec<String> = vocab_b.difference(&vocab_a).cloned().collect();

    let union_size = vocab_a.union(&vocab_b).count();
    let jaccard = if union_size == 0 {
        0.0
    } else {
        common.len() as f64 / union_size as f64
    };

    ComparisonReport {
        jaccard,
        common_count: common.len(),
        unique_a_count: only_a.len(),
        unique_b_count: only_b.len(),
        sample_common: sample(common),
        sample_unique_a: sample(only_a),
        sample_unique_b: sample(only_b),
    }
}

/// First `SAMPLE_SIZE` elements; input is already sorted (BTreeSet order).
fn sample(mut words: Vec<String>) -> Vec<String> {
    words.truncate(SAMPLE_SIZE);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_one_third() {
        // After stopword removal: {gato, corre} vs {perro, corre}.
        let report = compare_texts("el gato corre", "el perro corre");
        assert!((report.jaccard - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(report.common_count, 1);
        assert_eq!(report.unique_a_count, 1);
        assert_eq!(report.unique_b_count, 1);
        assert_eq!(report.sample_common, vec!["corre"]);
        assert_eq!(report.sample_unique_a, vec!["gato"]);
        assert_eq!(report.sample_unique_b, vec!["perro"]);
    }

    #[test]
    fn identical_texts_have_jaccard_one() {
        let report = compare_texts("gato corre rápido", "gato corre rápido");
        assert_eq!(report.jaccard, 1.0);
        assert_eq!(report.unique_a_count, 0);
        assert_eq!(report.unique_b_count, 0);
    }

    #[test]
    fn disjoint_texts_have_jaccard_zero() {
        let report = compare_texts("gato perro", "sol luna");
        assert_eq!(report.jaccard, 0.0);
        assert_eq!(report.common_count, 0);
    }

    #[test]
    fn both_empty_is_zero_not_nan() {
        let report = compare_texts("", "");
        assert_eq!(report.jaccard, 0.0);
        assert!(report.sample_common.is_empty());
    }

    #[test]
    fn samples_are_sorted_and_capped() {
        let many: String = (0..30).map(|i| format!("palabra{i:02} ")).collect();
        let report = compare_texts(&many, "");
        assert_eq!(report.sample_unique_a.len(), 10);
        let mut sorted = report.sample_unique_a.clone();
        sorted.sort();
        assert_eq!(report.sample_unique_a, sorted);
    }
}
