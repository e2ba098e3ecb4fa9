//! Log file setup.
//!
//! The terminal belongs to the TUI, so logs go to
//! `~/.sidediff/logs/sidediff.log` as plain text. `SIDEDIFF_LOG` takes an
//! `EnvFilter` directive such as `debug` or `sidediff=trace`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::CONFIG_DIR;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SIDEDIFF_LOG";

/// Filter used when `SIDEDIFF_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// `~/.sidediff/logs/sidediff.log`
pub fn log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join("logs").join("sidediff.log"))
}

/// Parse a filter directive, falling back to [`DEFAULT_FILTER`].
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Returns the log file path, or `None` when
/// logging could not be set up, in which case the app runs without logs.
pub fn init_logging() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let directive = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}
