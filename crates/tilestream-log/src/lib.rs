//! Logging setup for the tile streaming engine.
//!
//! Console logging through the `tracing` ecosystem with env-based
//! filtering, plus an optional JSON file sink in debug builds for
//! post-mortem analysis.

use std::fs::File;
use std::path::Path;

use tilestream_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE: &str = "tilestream.log";

/// Initialize global logging.
///
/// The active filter is resolved in order: `RUST_LOG` when set, then the
/// config's `debug.log_level`, then "info". Console output carries module
/// targets, thread names, and an uptime timer. When `debug_build` is true
/// and a log directory is given, events are additionally written to
/// `tilestream.log` in that directory as JSON; if the file cannot be
/// created, logging silently stays console-only.
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let registry = tracing_subscriber::registry()
        .with(resolve_filter(config))
        .with(
            fmt::layer()
                .with_thread_names(true)
                .with_timer(fmt::time::uptime()),
        );

    let sink = if debug_build {
        log_dir.and_then(open_log_sink)
    } else {
        None
    };

    match sink {
        Some(file) => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(file))
            .init(),
        None => registry.init(),
    }
}

/// `EnvFilter` with the default filter string ("info").
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

fn resolve_filter(config: Option<&Config>) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = config
        .map(|config| config.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER);
    EnvFilter::new(level)
}

/// Create the log file inside `dir`, creating the directory first.
/// Returns `None` when the filesystem refuses.
fn open_log_sink(dir: &Path) -> Option<File> {
    std::fs::create_dir_all(dir).ok()?;
    File::create(dir.join(LOG_FILE)).ok()
}
