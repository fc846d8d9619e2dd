//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so they never interleave with the menu and status
//! lines written to stdout. The filter is read from `THEMELINK_LOG` and falls
//! back to `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable consulted for the log filter directives.
pub const LOG_ENV: &str = "THEMELINK_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from [`LOG_ENV`], ignoring malformed directives.
pub fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Calling this twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn initialize() {
	let fmt_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(false)
		.without_time();

	let _ = tracing_subscriber::registry()
		.with(fmt_layer)
		.with(env_filter())
		.try_init();
}
