//! Report structs for text analysis.
//!
//! All structs derive `Serialize`/`Deserialize` (where round-tripping makes
//! sense) for CLI JSON output and the persisted result file.

use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyMap;
use crate::rules::QualityReport;

/// Descriptive statistics over a frequency distribution.
///
/// Only produced for non-empty distributions; the fields are never
/// partially defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of distinct tokens.
    pub unique_tokens: usize,
    /// Sum of all counts.
    pub total_tokens: usize,
    /// Mean count.
    pub mean: f64,
    /// Median count.
    pub median: f64,
    /// Population standard deviation of the counts.
    pub std_dev: f64,
    /// Population variance of the counts.
    pub variance: f64,
    /// Smallest count.
    pub min: usize,
    /// Largest count.
    pub max: usize,
    /// 25th percentile (linear interpolation).
    pub p25: f64,
    /// 50th percentile (linear interpolation).
    pub p50: f64,
    /// 75th percentile (linear interpolation).
    pub p75: f64,
}

/// One row of the ranked frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    /// 1-based rank in the sorted order.
    pub rank: usize,
    /// The token.
    pub token: String,
    /// Occurrence count.
    pub count: usize,
    /// Count divided by the total count.
    pub relative_frequency: f64,
    /// Running sum of counts over the sorted order.
    pub cumulative_count: usize,
}

/// Lexical diversity metrics for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiversityReport {
    /// Total tokens after normalization.
    pub total_tokens: usize,
    /// Distinct tokens.
    pub unique_tokens: usize,
    /// Unique / total; 0 for empty input.
    pub type_token_ratio: f64,
    /// Shannon entropy of the frequency distribution in bits.
    pub shannon_entropy: f64,
}

/// Vocabulary comparison between two texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Jaccard similarity of the two vocabularies, in [0, 1].
    pub jaccard: f64,
    /// Size of the vocabulary intersection.
    pub common_count: usize,
    /// Tokens only in the first text.
    pub unique_a_count: usize,
    /// Tokens only in the second text.
    pub unique_b_count: usize,
    /// Up to 10 shared tokens, sorted lexically.
    pub sample_common: Vec<String>,
    /// Up to 10 tokens unique to the first text, sorted lexically.
    pub sample_unique_a: Vec<String>,
    /// Up to 10 tokens unique to the second text, sorted lexically.
    pub sample_unique_b: Vec<String>,
}

/// The full result bundle for one analysis invocation.
///
/// A new invocation fully replaces the previous bundle; there is no
/// identity beyond "most recent analysis".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Total tokens after normalization.
    pub total_tokens: usize,
    /// Distinct tokens.
    pub unique_tokens: usize,
    /// Token → count, in first-occurrence order.
    #[serde(skip_deserializing)]
    pub frequencies: FrequencyMap,
    /// Top tokens as `[token, count]` pairs, count descending.
    pub top_tokens: Vec<(String, usize)>,
    /// The searched keyword, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Whether the keyword appears in the token sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_found: Option<bool>,
    /// The standalone vowel-start rule, reported separately for parity with
    /// the quality aggregate.
    pub vowel_start: bool,
    /// Full quality evaluation.
    pub quality: QualityReport,
    /// Lexical diversity metrics.
    pub diversity: DiversityReport,
    /// Extractive summary sentences.
    pub summary: Vec<String>,
}
