//! Diversity command: type-token ratio and Shannon entropy.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use palabra_core::analysis::diversity;

use super::read_input_file;

/// Arguments for the `diversity` subcommand.
#[derive(Args, Debug)]
pub struct DiversityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Show lexical diversity metrics for a file.
#[instrument(name = "cmd_diversity", skip_all, fields(file = %args.file))]
pub fn cmd_diversity(args: DiversityArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing diversity command");

    let content = read_input_file(&args.file)?;
    let report = diversity::lexical_diversity(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    println!(
        "\n  {} {} total, {} unique",
        "Tokens:".cyan(),
        report.total_tokens,
        report.unique_tokens,
    );
    println!(
        "  {} {:.3}",
        "Type-token ratio:".cyan(),
        report.type_token_ratio,
    );
    println!(
        "  {} {:.3} bits",
        "Shannon entropy:".cyan(),
        report.shannon_entropy,
    );

    Ok(())
}
