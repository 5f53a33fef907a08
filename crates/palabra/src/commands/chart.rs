//! Chart command: a terminal bar chart of the most frequent tokens.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use palabra_core::FrequencyMap;
use palabra_core::text;

use super::read_input_file;

/// Widest bar in terminal cells.
const MAX_BAR_WIDTH: usize = 40;

/// Arguments for the `chart` subcommand.
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// How many tokens to chart.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

/// Render a bar chart of the top tokens. Display only; nothing persists.
#[instrument(name = "cmd_chart", skip_all, fields(file = %args.file))]
pub fn cmd_chart(args: ChartArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, limit = args.limit, "executing chart command");

    let content = read_input_file(&args.file)?;
    let tokens = text::tokenize(&content);
    let freqs = FrequencyMap::from_tokens(&tokens);
    let top = freqs.top_n(args.limit);

    if top.is_empty() {
        bail!("{} has no analyzable tokens", args.file);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&top)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!();

    // max count is ≥ 1 since top is non-empty
    let max_count = top[0].1.max(1);
    for (token, count) in &top {
        let width = (count * MAX_BAR_WIDTH).div_ceil(max_count);
        let bar: String = "█".repeat(width);
        println!("  {token:<20} {} {count}", bar.cyan());
    }

    Ok(())
}
