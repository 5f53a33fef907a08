//! Text normalization and tokenization.
//!
//! The pipeline is: lower-case → strip punctuation (keeping accented vowels
//! and ñ) → split on whitespace → drop stopwords → lemmatize. Sentence
//! splitting is intentionally simple (`.`, `!`, `?`) since the downstream
//! consumers only need sentence counts and summary candidates.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::lemmas::SPANISH_LEMMATIZER;
use crate::dictionaries::stopwords::SPANISH_STOPWORDS;

/// Everything that is not a word character, whitespace, an accented Spanish
/// vowel, or ñ. Matched characters are deleted outright, not replaced with
/// a space, so "co-ocurrencia" normalizes to "coocurrencia".
static NON_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\sáéíóúñ]").expect("valid regex"));

/// Sentence terminators for the summary/readability splitters.
static SENTENCE_SPLIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("valid regex"));

/// Reduces a token to its canonical dictionary form.
///
/// Implementations must be total: unknown words pass through unchanged.
pub trait Lemmatizer {
    /// Return the lemma for `token`.
    fn lemmatize(&self, token: &str) -> String;
}

/// Membership test for a fixed stopword list.
pub trait StopwordSet {
    /// Return `true` if `token` is a stopword.
    fn contains(&self, token: &str) -> bool;
}

/// Lemmatizer that returns every token unchanged. Useful for tests and for
/// callers that want raw surface forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Stopword set that contains nothing. Useful for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStopwords;

impl StopwordSet for EmptyStopwords {
    fn contains(&self, _token: &str) -> bool {
        false
    }
}

/// Lower-case the text and delete every character outside the word class.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD_PATTERN.replace_all(&lowered, "").into_owned()
}

/// Tokenize with the default Spanish stopword list and lemmatizer.
///
/// Never fails: empty or all-punctuation input yields an empty vector.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, &*SPANISH_LEMMATIZER, &*SPANISH_STOPWORDS)
}

/// Tokenize with injected linguistic resources.
///
/// Stopwords are filtered before lemmatization, so a stopword list of
/// surface forms behaves the same as in the default pipeline.
pub fn tokenize_with(
    text: &str,
    lemmatizer: &dyn Lemmatizer,
    stopwords: &dyn StopwordSet,
) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| !stopwords.contains(w))
        .map(|w| lemmatizer.lemmatize(w))
        .collect()
}

/// Split text into sentences on `.`, `!`, `?`, trimming whitespace and
/// dropping empty fragments.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_SPLIT_PATTERN
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
