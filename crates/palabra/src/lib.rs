//! Library interface for the `palabra` CLI.
//!
//! Exposes the argument parser and command structure as a library for
//! testing. The actual entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, palabra=trace)
    PALABRA_LOG_LEVEL      Log level (debug, info, warn, error)
    PALABRA_RESULT_PATH    Where `analyze` persists the result bundle
";

/// Command-line interface definition for palabra.
#[derive(Parser)]
#[command(name = "palabra")]
#[command(about = "Word-frequency statistics and quality scoring for Spanish text", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the full analysis and persist the result bundle
    Analyze(commands::analyze::AnalyzeArgs),

    /// Descriptive statistics and the ranked frequency table
    Stats(commands::stats::StatsArgs),

    /// Score readability (Flesch-Kincaid approximation)
    Readability(commands::readability::ReadabilityArgs),

    /// Lexical diversity (type-token ratio, Shannon entropy)
    Diversity(commands::diversity::DiversityArgs),

    /// Compare the vocabularies of two texts
    Compare(commands::compare::CompareArgs),

    /// Analyze a text column of a CSV file
    Batch(commands::batch::BatchArgs),

    /// Render a bar chart of the most frequent tokens
    Chart(commands::chart::ChartArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}
