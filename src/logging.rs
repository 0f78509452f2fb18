//! Tracing setup
//!
//! The terminal is in raw mode while the dashboard runs, so log lines go to
//! `labdash.log` next to the session files instead of stderr.

use crate::error::{AppError, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `LABDASH_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "labdash=info,labdash_core=info";

/// Log file location inside `dir`
pub fn log_path(dir: &Path) -> PathBuf {
    dir.join("labdash.log")
}

/// Install the global subscriber writing to `<dir>/labdash.log`
pub fn init_tracing(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = log_path(dir);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_env("LABDASH_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_path() {
        assert_eq!(
            log_path(Path::new("/tmp/sessions")),
            PathBuf::from("/tmp/sessions/labdash.log")
        );
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("logs");
        // A subscriber may already be installed by another test; the file is
        // created either way.
        let _ = init_tracing(&dir);
        assert!(log_path(&dir).exists());
    }
}
