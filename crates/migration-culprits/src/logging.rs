use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MIGRATION_CULPRITS_LOG=debug`.
pub(crate) const LOG_ENV: &str = "MIGRATION_CULPRITS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Logs go to stderr so stdout carries only the findings.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
