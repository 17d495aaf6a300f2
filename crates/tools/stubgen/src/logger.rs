use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_LEVEL;

/// Initializes the process-wide tracing subscriber.
///
/// `level` accepts any env-filter directive; an invalid or missing
/// directive falls back to the default level. Repeat initialization keeps
/// the first subscriber, so tests can call this freely.
pub fn init_logger(level: Option<&str>) {
    let directive = level.unwrap_or(DEFAULT_LOG_LEVEL);
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
