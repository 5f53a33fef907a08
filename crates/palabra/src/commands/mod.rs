//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod batch;
pub mod chart;
pub mod compare;
pub mod diversity;
pub mod info;
pub mod readability;
pub mod stats;

/// Read an input file for analysis. `-` reads standard input.
///
/// A separate helper so every command reports unreadable files the same
/// way, without partial computation.
pub fn read_input_file(path: &Utf8Path) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        let mut content = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut content)
            .context("failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
