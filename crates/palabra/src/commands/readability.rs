//! Readability command: the Flesch-Kincaid approximation.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use palabra_core::analysis::readability;
use palabra_core::text;

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct ReadabilityOutput {
    score: f64,
    words: usize,
    sentences: usize,
}

/// Score readability of a file.
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(args: ReadabilityArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing readability command");

    let content = read_input_file(&args.file)?;
    let tokens = text::tokenize(&content);
    let sentences = text::split_sentences(&content);
    let score = readability::flesch_kincaid(&tokens, &sentences);

    if global_json {
        let output = ReadabilityOutput {
            score,
            words: tokens.len(),
            sentences: sentences.len(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{score:.1}");
    }

    Ok(())
}
