//! Batch command: CSV text-column analysis.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use palabra_core::Config;
use palabra_core::batch;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file to analyze.
    pub file: Utf8PathBuf,

    /// Name of the text column (overrides config).
    #[arg(long, value_name = "NAME")]
    pub column: Option<String>,
}

/// Analyze a text column across all records of a CSV file.
#[instrument(name = "cmd_batch", skip_all, fields(file = %args.file))]
pub fn cmd_batch(args: BatchArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let column = args.column.as_deref().unwrap_or(&config.text_column);
    debug!(file = %args.file, column, "executing batch command");

    let report = batch::analyze_csv(args.file.as_std_path(), column)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {} records, {} tokens ({} unique), TTR {:.3}",
        "Batch:".cyan(),
        report.records,
        report.total_tokens,
        report.unique_tokens,
        report.type_token_ratio,
    );
    if let Some(ref stats) = report.stats {
        println!(
            "  {} mean {:.2}, median {:.1}, σ {:.2}, min {}, max {}",
            "Counts:".cyan(),
            stats.mean,
            stats.median,
            stats.std_dev,
            stats.min,
            stats.max,
        );
    }

    Ok(())
}
