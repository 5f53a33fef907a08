//! Analyze command: the full pipeline plus result persistence.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use palabra_core::Config;
use palabra_core::analysis;

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,

    /// Keyword to search for in the token sequence.
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Where to write the result bundle (overrides config).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Skip writing the result bundle.
    #[arg(long)]
    pub no_save: bool,
}

/// Run the full analysis on a file and persist the result bundle.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(args: AnalyzeArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(file = %args.file, keyword = ?args.keyword, "executing analyze command");

    let content = read_input_file(&args.file)?;
    let keyword = args.keyword.as_deref().or(config.keyword.as_deref());

    let report = analysis::run_analysis(&content, keyword, &config.thresholds)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    // Persist the latest bundle before printing: the file is the durable
    // output, the terminal rendering is a view on it. Overwrites any
    // previous bundle; a write failure aborts without touching stdout.
    if !args.no_save {
        let result_path = args.output.as_ref().unwrap_or(&config.result_path);
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(result_path.as_std_path(), json)
            .with_context(|| format!("failed to write result bundle to {result_path}"))?;
        debug!(path = %result_path, "result bundle saved");
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", args.file.bold());

    println!(
        "\n  {} {} total, {} unique, diversity {:.1}%",
        "Tokens:".cyan(),
        report.total_tokens,
        report.unique_tokens,
        report.diversity.type_token_ratio * 100.0,
    );

    println!("\n  {}", "Top tokens:".cyan());
    for (i, (token, count)) in report.top_tokens.iter().enumerate() {
        println!("    {}. {token}: {count}", i + 1);
    }

    if let (Some(pattern), Some(found)) = (&report.pattern, report.pattern_found) {
        let marker = if found {
            "found".green().to_string()
        } else {
            "not found".red().to_string()
        };
        println!("\n  {} \"{pattern}\" {marker}", "Keyword:".cyan());
    }

    let q = &report.quality;
    println!("\n  {}", "Quality rules:".cyan());
    for (name, passed) in [
        ("vowel start", q.vowel_start),
        ("consonant start", q.consonant_start),
        ("min length", q.min_length),
        ("diversity", q.diversity),
        ("academic language", q.academic_language),
        ("no excessive repetition", q.no_excessive_repetition),
    ] {
        let mark = if passed {
            "✓".green().to_string()
        } else {
            "✗".red().to_string()
        };
        println!("    {mark} {name}");
    }
    println!(
        "\n  {} {:.0}% ({})",
        "Quality:".cyan(),
        q.quality_score * 100.0,
        q.quality_label,
    );

    if !report.summary.is_empty() {
        println!("\n  {}", "Summary:".cyan());
        for sentence in &report.summary {
            println!("    • {sentence}");
        }
    }

    Ok(())
}
