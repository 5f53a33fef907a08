//! Token frequency counting and derived views.
//!
//! [`FrequencyMap`] keeps an explicit first-occurrence order next to the
//! counts so that every sorted view has a deterministic, documented
//! tie-break: equal counts appear in the order the tokens first occurred in
//! the source text.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::text;

/// Occurrence counts for the distinct tokens of one token sequence.
///
/// Invariants: keys are exactly the distinct tokens of the source sequence,
/// every count is ≥ 1, and the counts sum to the sequence length. Iteration
/// and serialization follow first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyMap {
    /// Count occurrences in a token sequence.
    #[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order = Vec::new();
        for token in tokens {
            let entry = counts.entry(token.clone()).or_insert(0);
            if *entry == 0 {
                order.push(token.clone());
            }
            *entry += 1;
        }
        Self { counts, order }
    }

    /// Count for a token, 0 if absent.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// `true` if the token occurs at least once.
    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (length of the source token sequence).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate `(token, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order.iter().map(|t| (t.as_str(), self.counts[t]))
    }

    /// Iterate the counts in first-occurrence order.
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().map(|t| self.counts[t])
    }

    /// The `k` most frequent tokens, count descending.
    ///
    /// The sort is stable over first-occurrence order, so tokens with equal
    /// counts keep the order they first appeared in the text.
    pub fn top_n(&self, k: usize) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .iter()
            .map(|(t, c)| (t.to_string(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
    }
}

impl Serialize for FrequencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (token, count) in self.iter() {
            map.serialize_entry(token, &count)?;
        }
        map.end()
    }
}

/// Count n-token windows over the sequence.
///
/// `n` is clamped to a minimum of 1; when `n` exceeds the sequence length
/// the result is empty. Never panics.
pub fn ngrams(tokens: &[String], n: usize) -> HashMap<Vec<String>, usize> {
    let n = n.max(1);
    let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
    if n > tokens.len() {
        return counts;
    }
    for window in tokens.windows(n) {
        *counts.entry(window.to_vec()).or_insert(0) += 1;
    }
    counts
}

/// Fraction of the token sequence equal to `keyword`, case-insensitive.
///
/// Returns 0.0 for an empty sequence; the result is always in [0, 1].
pub fn keyword_density(tokens: &[String], keyword: &str) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let keyword = keyword.to_lowercase();
    let occurrences = tokens.iter().filter(|t| **t == keyword).count();
    occurrences as f64 / tokens.len() as f64
}

/// Extractive summary: sentences containing any of the top tokens.
///
/// Matching is substring-based over the lower-cased sentence, not whole-word:
/// "corre" also matches "corredor". This mirrors the scoring the rest of the
/// pipeline was calibrated against.
pub fn summary_sentences(text: &str, top: &[(String, usize)]) -> Vec<String> {
    text::split_sentences(text)
        .into_iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            top.iter().any(|(token, _)| lowered.contains(token.as_str()))
        })
        .collect()
}
