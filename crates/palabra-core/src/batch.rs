//! Batch analysis over a CSV text column.
//!
//! Concatenates the named column across all records into one text blob and
//! runs the standard pipeline over it. Missing fields (short rows, empty
//! cells) are treated as empty strings, matching spreadsheet exports where
//! trailing columns are often dropped.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::analysis::reports::DescriptiveStats;
use crate::analysis::{diversity, stats};
use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::FrequencyMap;
use crate::text;

/// Aggregate report for one CSV batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Number of data records in the file.
    pub records: usize,
    /// Total tokens across the concatenated column.
    pub total_tokens: usize,
    /// Distinct tokens.
    pub unique_tokens: usize,
    /// Descriptive statistics; absent when the column held no tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DescriptiveStats>,
    /// Type-token ratio of the concatenated text.
    pub type_token_ratio: f64,
}

/// Analyze the `text_column` of a CSV file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display(), column = text_column))]
pub fn analyze_csv<P: AsRef<std::path::Path>>(
    path: P,
    text_column: &str,
) -> AnalysisResult<BatchReport> {
    let reader = csv::Reader::from_path(path)?;
    analyze_csv_records(reader, text_column)
}

/// Analyze the `text_column` of CSV data from any reader. Used directly by
/// tests and by callers that already hold the bytes.
pub fn analyze_csv_reader<R: Read>(reader: R, text_column: &str) -> AnalysisResult<BatchReport> {
    let csv_reader = csv::Reader::from_reader(reader);
    analyze_csv_records(csv_reader, text_column)
}

fn analyze_csv_records<R: Read>(
    mut reader: csv::Reader<R>,
    text_column: &str,
) -> AnalysisResult<BatchReport> {
    let headers = reader.headers()?.clone();
    let column_index = headers
        .iter()
        .position(|h| h == text_column)
        .ok_or_else(|| AnalysisError::MissingColumn {
            column: text_column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut records = 0;
    let mut combined = String::new();
    for record in reader.records() {
        let record = record?;
        records += 1;
        // Rows shorter than the header are padded with emptiness.
        let field = record.get(column_index).unwrap_or("");
        if !combined.is_empty() {
            combined.push(' ');
        }
        combined.push_str(field);
    }

    let tokens = text::tokenize(&combined);
    let freqs = FrequencyMap::from_tokens(&tokens);
    let diversity = diversity::diversity_of_tokens(&tokens);

    tracing::info!(records, tokens = tokens.len(), "batch analysis complete");

    Ok(BatchReport {
        records,
        total_tokens: tokens.len(),
        unique_tokens: freqs.len(),
        stats: stats::descriptive(&freqs),
        type_token_ratio: diversity.type_token_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_text_column() {
        let csv = "texto,autor\nel gato corre,ana\nel perro corre,luis\n";
        let report = analyze_csv_reader(csv.as_bytes(), "texto").unwrap();
        assert_eq!(report.records, 2);
        assert_eq!(report.total_tokens, 4);
        assert_eq!(report.unique_tokens, 3);
        let stats = report.stats.unwrap();
        assert_eq!(stats.total_tokens, 4);
        assert!((report.type_token_ratio - 0.75).abs() < 1e-12);
    }

    #[test]
    fn missing_column_names_the_request() {
        let csv = "titulo,autor\nhola,ana\n";
        let err = analyze_csv_reader(csv.as_bytes(), "texto").unwrap_err();
        match err {
            AnalysisError::MissingColumn { column, available } => {
                assert_eq!(column, "texto");
                assert!(available.contains("titulo"));
                assert!(available.contains("autor"));
            }
            other => panic!("unexpected error: {other}"),
        }
        let message = analyze_csv_reader(csv.as_bytes(), "texto")
            .unwrap_err()
            .to_string();
        assert!(message.contains("'texto'"));
    }

    #[test]
    fn empty_cells_are_tolerated() {
        let csv = "texto\ngato\n\ngato\n";
        let report = analyze_csv_reader(csv.as_bytes(), "texto").unwrap();
        assert_eq!(report.total_tokens, 2);
        assert_eq!(report.unique_tokens, 1);
    }

    #[test]
    fn header_only_file_has_no_stats() {
        let csv = "texto\n";
        let report = analyze_csv_reader(csv.as_bytes(), "texto").unwrap();
        assert_eq!(report.records, 0);
        assert_eq!(report.total_tokens, 0);
        assert!(report.stats.is_none());
        assert_eq!(report.type_token_ratio, 0.0);
    }
}
