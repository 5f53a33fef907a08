//! Info command: package information and the effective configuration.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use palabra_core::config::ConfigSources;
use palabra_core::{Config, RuleThresholds};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct InfoOutput<'a> {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    config: ConfigInfo<'a>,
}

#[derive(Serialize)]
struct ConfigInfo<'a> {
    log_level: &'static str,
    config_file: Option<&'a str>,
    result_path: &'a str,
    text_column: &'a str,
    keyword: Option<&'a str>,
    thresholds: &'a RuleThresholds,
}

/// Show package information and where the configuration came from.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = InfoOutput {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        config: ConfigInfo {
            log_level: config.log_level.as_str(),
            config_file: sources.primary_file().map(|p| p.as_str()),
            result_path: config.result_path.as_str(),
            text_column: &config.text_column,
            keyword: config.keyword.as_deref(),
            thresholds: &config.thresholds,
        },
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", info.name.bold(), info.version);
    println!("{}", info.description);
    println!("\n  {} {}", "Log level:".cyan(), info.config.log_level);
    match info.config.config_file {
        Some(file) => println!("  {} {file}", "Config file:".cyan()),
        None => println!("  {} (defaults)", "Config file:".cyan()),
    }
    println!("  {} {}", "Result path:".cyan(), info.config.result_path);
    println!("  {} {}", "Text column:".cyan(), info.config.text_column);

    Ok(())
}
