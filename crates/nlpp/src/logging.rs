//! Progress logging for the command line
//!
//! The preprocessor reports what it does through `tracing` events. This module
//! installs the subscriber that prints them to stderr, keeping stdout free for
//! output written to `-`.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// The level used when `RUST_LOG` does not say otherwise
///
/// Silent mode keeps errors only, so warnings are dropped along with progress.
pub const fn default_level(silent: bool) -> LevelFilter {
    if silent {
        LevelFilter::ERROR
    } else {
        LevelFilter::INFO
    }
}

/// Install the global subscriber
///
/// # Errors
/// Fails if a global subscriber was already installed.
pub fn init(silent: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(silent).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(anyhow::Error::msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_only_reports_errors() {
        assert_eq!(default_level(true), LevelFilter::ERROR);
        assert_eq!(default_level(false), LevelFilter::INFO);
    }
}
