//! Stats command: descriptive statistics and the ranked table.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use palabra_core::FrequencyMap;
use palabra_core::analysis::reports::{DescriptiveStats, RankedRow};
use palabra_core::analysis::stats;
use palabra_core::text;

use super::read_input_file;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Maximum ranked-table rows to show (0 for all).
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Serialize)]
struct StatsOutput {
    stats: DescriptiveStats,
    table: Vec<RankedRow>,
}

/// Show descriptive statistics and the ranked frequency table for a file.
#[instrument(name = "cmd_stats", skip_all, fields(file = %args.file))]
pub fn cmd_stats(args: StatsArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing stats command");

    let content = read_input_file(&args.file)?;
    let tokens = text::tokenize(&content);
    let freqs = FrequencyMap::from_tokens(&tokens);

    let Some(descriptive) = stats::descriptive(&freqs) else {
        bail!("{} has no analyzable tokens", args.file);
    };
    let mut table = stats::ranked_table(&freqs);
    if args.limit > 0 {
        table.truncate(args.limit);
    }

    if global_json {
        let output = StatsOutput {
            stats: descriptive,
            table,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {} unique / {} total",
        "Tokens:".cyan(),
        descriptive.unique_tokens,
        descriptive.total_tokens,
    );
    println!(
        "  {} mean {:.2}, median {:.1}, σ {:.2}",
        "Counts:".cyan(),
        descriptive.mean,
        descriptive.median,
        descriptive.std_dev,
    );
    println!(
        "  {} min {}, p25 {:.1}, p50 {:.1}, p75 {:.1}, max {}",
        "Spread:".cyan(),
        descriptive.min,
        descriptive.p25,
        descriptive.p50,
        descriptive.p75,
        descriptive.max,
    );

    println!("\n  {:>4}  {:<20} {:>6} {:>8} {:>6}", "rank", "token", "count", "rel", "cum");
    for row in &table {
        println!(
            "  {:>4}  {:<20} {:>6} {:>7.1}% {:>6}",
            row.rank,
            row.token,
            row.count,
            row.relative_frequency * 100.0,
            row.cumulative_count,
        );
    }

    Ok(())
}
