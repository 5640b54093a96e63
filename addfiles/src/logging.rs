//! Diagnostic tracing for the checker.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. The checklist and
//! instructions on stdout are product output and never depend on it.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber.
///
/// Lines carry no timestamp or target so repeated runs produce the same
/// diagnostics.
///
/// # Example
/// ```bash
/// RUST_LOG=addfiles=debug addfiles --base-dir ~/Projects/App
/// ```
pub fn init() {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();
    tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .init();
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}
