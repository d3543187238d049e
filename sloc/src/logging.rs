//! Diagnostics on stderr via `tracing-subscriber`.
//!
//! `-d` turns on `debug` events (skipped paths, per-file language), `-dd`
//! adds `trace` events (one line per classified source line).

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;

/// Map a `-d` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
