//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to
//! `$DECKPILOT_HOME/logs/deckpilot.log`. Stdout stays free for the console
//! renderer. Previous session logs are rotated on startup.

use crate::config::{ConfigManager, LogSettings};
use crate::error::{DeckError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Number of previous sessions kept (deckpilot.log.1 through deckpilot.log.5)
const MAX_LOG_FILES: u8 = 5;

const LOG_PREFIX: &str = "deckpilot";
const LOG_SUFFIX: &str = "log";

/// Initialize the logging system
///
/// The filter comes from `RUST_LOG` when set, otherwise from `settings.level`.
pub fn init_logging(settings: &LogSettings) -> Result<()> {
    let log_dir = ConfigManager::home_dir().join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("{LOG_PREFIX}.{LOG_SUFFIX}"));
    rotate_logs_on_startup(&log_path, MAX_LOG_FILES)?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .build(&log_dir)
        .map_err(|e| DeckError::LoggingError(Box::new(e)))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| DeckError::LoggingError(Box::new(e)))?;

    tracing::info!("deckpilot v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `name.log` → `name.log.1` → ... → `name.log.{keep}`, dropping the oldest
fn rotate_logs_on_startup(log_path: &Path, keep: u8) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| DeckError::LoggingError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| DeckError::LoggingError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest = log_dir.join(format!("{log_name}.{keep}"));
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for i in (1..keep).rev() {
        let current = log_dir.join(format!("{log_name}.{i}"));
        if current.exists() {
            std::fs::rename(&current, log_dir.join(format!("{log_name}.{}", i + 1)))?;
        }
    }

    if keep > 0 {
        std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;
    } else {
        std::fs::remove_file(log_path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    #[test]
    fn test_rotation_moves_current_log() {
        let dir = create_test_dir();
        let log_path = dir.path().join("deckpilot.log");
        fs::write(&log_path, "session 1").unwrap();

        rotate_logs_on_startup(&log_path, MAX_LOG_FILES).unwrap();

        assert!(!log_path.exists());
        let rotated = fs::read_to_string(dir.path().join("deckpilot.log.1")).unwrap();
        assert_eq!(rotated, "session 1");
    }

    #[test]
    fn test_rotation_keeps_newest_generations() {
        let dir = create_test_dir();
        let log_path = dir.path().join("deckpilot.log");

        for session in 1..=8 {
            fs::write(&log_path, format!("session {session}")).unwrap();
            rotate_logs_on_startup(&log_path, MAX_LOG_FILES).unwrap();
        }

        let newest = fs::read_to_string(dir.path().join("deckpilot.log.1")).unwrap();
        assert_eq!(newest, "session 8");
        let oldest = fs::read_to_string(dir.path().join("deckpilot.log.5")).unwrap();
        assert_eq!(oldest, "session 4");
        assert!(!dir.path().join("deckpilot.log.6").exists());
    }

    #[test]
    fn test_rotation_without_log_is_noop() {
        let dir = create_test_dir();
        let log_path = dir.path().join("deckpilot.log");

        rotate_logs_on_startup(&log_path, MAX_LOG_FILES).unwrap();
        assert!(!dir.path().join("deckpilot.log.1").exists());
    }

    #[test]
    fn test_rotation_with_gaps() {
        let dir = create_test_dir();
        let log_path = dir.path().join("deckpilot.log");
        fs::write(&log_path, "current").unwrap();
        fs::write(dir.path().join("deckpilot.log.3"), "older").unwrap();

        rotate_logs_on_startup(&log_path, MAX_LOG_FILES).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("deckpilot.log.1")).unwrap(),
            "current"
        );
        assert!(!dir.path().join("deckpilot.log.3").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("deckpilot.log.4")).unwrap(),
            "older"
        );
    }
}
