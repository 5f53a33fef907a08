//! Compare command: vocabulary similarity between two texts.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use palabra_core::analysis::compare;

use super::read_input_file;

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First file.
    pub file_a: Utf8PathBuf,

    /// Second file.
    pub file_b: Utf8PathBuf,
}

/// Compare the vocabularies of two files.
#[instrument(name = "cmd_compare", skip_all, fields(a = %args.file_a, b = %args.file_b))]
pub fn cmd_compare(args: CompareArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(a = %args.file_a, b = %args.file_b, "executing compare command");

    let text_a = read_input_file(&args.file_a)?;
    let text_b = read_input_file(&args.file_b)?;
    let report = compare::compare_texts(&text_a, &text_b);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} vs {}", args.file_a.bold(), args.file_b.bold());
    println!(
        "\n  {} {:.3}",
        "Jaccard similarity:".cyan(),
        report.jaccard,
    );
    println!(
        "  {} {} shared, {} only in A, {} only in B",
        "Vocabulary:".cyan(),
        report.common_count,
        report.unique_a_count,
        report.unique_b_count,
    );
    if !report.sample_common.is_empty() {
        println!("  {} {}", "Shared:".cyan(), report.sample_common.join(", "));
    }
    if !report.sample_unique_a.is_empty() {
        println!("  {} {}", "Only A:".cyan(), report.sample_unique_a.join(", "));
    }
    if !report.sample_unique_b.is_empty() {
        println!("  {} {}", "Only B:".cyan(), report.sample_unique_b.join(", "));
    }

    Ok(())
}
