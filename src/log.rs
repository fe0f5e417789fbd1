// src/log.rs
//
// Logging goes through `tracing`. `init` wires a stderr layer for humans and,
// when given a directory, a plain-text file layer for post-mortems.
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::consts::LOG_FILE;

/// Install the global subscriber. `verbose` lowers the default level to debug;
/// `RUST_LOG` still wins when set. `log_dir` (created if missing) receives
/// `debug.log`; `None` logs to stderr only. Calling twice is harmless (second
/// call is a no-op).
pub fn init(verbose: bool, log_dir: Option<&Path>) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    // File layer is best-effort: unwritable dir, no file log.
    let file_layer = log_dir.and_then(open_log_file).map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

fn open_log_file(dir: &Path) -> Option<fs::File> {
    fs::create_dir_all(dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
        .ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lands_in_given_dir() {
        let dir = std::env::temp_dir().join(format!("fantasy_archive_log_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        assert!(open_log_file(&dir).is_some());
        assert!(dir.join(LOG_FILE).is_file());
    }
}
