use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the diagnostics filter.
pub const LOG_FILTER_ENV: &str = "DEVLOG_LOG";

/// Environment variable that switches diagnostics to JSON lines.
pub const LOG_FORMAT_ENV: &str = "DEVLOG_LOG_FORMAT";

/// Initialize diagnostics for the formatter itself.
///
/// stdout carries the formatted log stream, so diagnostics go to stderr:
/// - Filter comes from `DEVLOG_LOG` (defaults to "warn" if not set)
/// - `DEVLOG_LOG_FORMAT=json` emits flattened JSON events instead of text
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    if std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        init_json_logging(filter);
    } else {
        init_text_logging(filter);
    }
}

fn init_text_logging(filter: EnvFilter) {
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn init_json_logging(filter: EnvFilter) {
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}
