//! Diagnostic tracing for the playground CLI.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`. Snippet results
//! are printed to stdout by the CLI and never pass through the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber: `RUST_LOG` filter (falling back to
/// `warn`) feeding a compact formatter on stderr.
///
/// Per-snippet `debug!` events become visible with
/// `RUST_LOG=playground=debug closure-playground run`.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
