//! Core library for palabra.
//!
//! Word-frequency statistics, lexical-diversity metrics, and rule-based
//! quality scoring over Spanish text. The pipeline runs in one direction:
//! raw text → tokens → frequency map → {statistics, rules} → result bundle.
//!
//! # Modules
//!
//! - [`text`] - Normalization, tokenization, sentence splitting
//! - [`dictionaries`] - Stopwords, lemmatizer, academic markers
//! - [`frequency`] - Frequency counting, top-N, n-grams, keyword density
//! - [`analysis`] - Statistics, diversity, comparison, readability
//! - [`rules`] - Predicate rules and the quality aggregate
//! - [`batch`] - CSV batch analysis
//! - [`config`] - Configuration loading and discovery
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use palabra_core::analysis;
//! use palabra_core::rules::RuleThresholds;
//!
//! let report = analysis::run_analysis(
//!     "El gato corre y el perro corre.",
//!     Some("gato"),
//!     &RuleThresholds::default(),
//! )
//! .expect("non-empty text analyzes");
//!
//! assert_eq!(report.pattern_found, Some(true));
//! assert_eq!(report.top_tokens[0].0, "corre");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod batch;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod frequency;
pub mod rules;
pub mod text;

pub use analysis::AnalysisReport;
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use frequency::FrequencyMap;
pub use rules::{QualityLabel, QualityReport, RuleThresholds};
