//! Error types for palabra-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or has no analyzable content.
    #[error("no analyzable text in input")]
    EmptyInput,

    /// The requested text column does not exist in the tabular input.
    #[error("column '{column}' not found in CSV. Available: {available}")]
    MissingColumn {
        /// The column name that was requested.
        column: String,
        /// Comma-separated list of available column names.
        available: String,
    },

    /// The CSV input could not be read or parsed.
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
