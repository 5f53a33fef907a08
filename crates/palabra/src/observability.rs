//! Logging/tracing initialization.

use tracing_subscriber::EnvFilter;

/// Build the env filter from CLI flags and the configured log level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, each `-v`
/// steps the configured level up (info → debug → trace).
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global subscriber. Logs go to stderr so stdout stays
/// clean for command output and `--json` piping.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
