//! Configuration manager for loading and saving deck configuration
//!
//! The configuration lives in `$DECKPILOT_HOME/config.json` (current directory
//! when the variable is unset). Writes go through a temporary file in the same
//! directory and are persisted with a rename, so a crash never leaves a
//! half-written file behind.

use crate::config::models::DeckConfig;
use crate::error::{DeckError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the deckpilot home directory
pub const HOME_ENV_VAR: &str = "DECKPILOT_HOME";

/// How a configuration was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file on disk; defaults in use
    Missing,
    /// File parsed and validated
    Loaded,
    /// File unusable; defaults in use for the given reason
    Fallback(String),
}

/// Configuration together with the outcome of loading it
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Configuration to run with
    pub config: DeckConfig,
    /// How `config` was obtained
    pub outcome: LoadOutcome,
}

impl LoadReport {
    fn fallback(reason: String) -> Self {
        Self {
            config: DeckConfig::default(),
            outcome: LoadOutcome::Fallback(reason),
        }
    }

    /// Reason the file on disk was ignored, if it was
    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.outcome {
            LoadOutcome::Fallback(reason) => Some(reason.as_str()),
            LoadOutcome::Missing | LoadOutcome::Loaded => None,
        }
    }

    /// Log the outcome of loading `path`
    pub fn log(&self, path: &Path) {
        match &self.outcome {
            LoadOutcome::Missing => {
                info!("Configuration file not found at {}, using defaults", path.display());
            }
            LoadOutcome::Loaded => info!(
                "Configuration loaded: {} slides, credits on slide {}",
                self.config.deck.total_slides,
                self.config.deck.credits_slide + 1
            ),
            LoadOutcome::Fallback(reason) => warn!("{}", reason),
        }
    }
}

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Directory holding the configuration file and logs
    pub fn home_dir() -> PathBuf {
        std::env::var_os(HOME_ENV_VAR).map_or_else(|| PathBuf::from("."), PathBuf::from)
    }

    /// Get the path to the configuration file
    ///
    /// Returns: $DECKPILOT_HOME/config.json
    pub fn get_config_path() -> PathBuf {
        Self::home_dir().join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<DeckConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `path`
    ///
    /// A missing file yields the defaults. A file that does not parse or that
    /// violates a deck invariant is reported and replaced by the defaults, so
    /// the show always starts.
    pub fn load_from(path: &Path) -> Result<DeckConfig> {
        let report = Self::load_report_from(path)?;
        report.log(path);
        Ok(report.config)
    }

    /// Load configuration from the default location without logging
    ///
    /// Used before the tracing subscriber is installed; call
    /// [`LoadReport::log`] once it is.
    pub fn load_report() -> Result<LoadReport> {
        Self::load_report_from(&Self::get_config_path())
    }

    /// Load configuration from `path`, recording how it was obtained
    pub fn load_report_from(path: &Path) -> Result<LoadReport> {
        if !path.exists() {
            return Ok(LoadReport {
                config: DeckConfig::default(),
                outcome: LoadOutcome::Missing,
            });
        }

        let json = std::fs::read_to_string(path)?;

        let config: DeckConfig = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(e) => {
                return Ok(LoadReport::fallback(format!(
                    "Failed to parse configuration, using defaults: {e}"
                )));
            }
        };

        if let Err(e) = config.validate() {
            return Ok(LoadReport::fallback(format!(
                "Configuration rejected, using defaults: {e}"
            )));
        }

        Ok(LoadReport {
            config,
            outcome: LoadOutcome::Loaded,
        })
    }

    /// Save configuration to the default location
    pub fn save(config: &DeckConfig) -> Result<()> {
        Self::save_to(config, &Self::get_config_path())
    }

    /// Save configuration to `path` with an atomic replace
    pub fn save_to(config: &DeckConfig, path: &Path) -> Result<()> {
        config.validate()?;

        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(config)?;
        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(json.as_bytes())?;
        temp.persist(path)
            .map_err(|e| DeckError::ConfigError(Box::new(e)))?;

        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{HomeGuard, create_test_dir};

    #[test]
    fn test_config_path_uses_home_variable() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);

        let path = ConfigManager::get_config_path();
        assert_eq!(path, temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = create_test_dir();
        let config = ConfigManager::load_from(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("nested").join("config.json");

        let mut config = DeckConfig::default();
        config.deck.total_slides = 12;
        config.deck.credits_slide = 11;
        config.timing.settle_ms = 250;

        ConfigManager::save_to(&config, &path).unwrap();
        let loaded = ConfigManager::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "deck": { "total_slides": 3, "credits_slide": 7 } }"#)
            .unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config.deck.total_slides, 9);
    }

    #[test]
    fn test_report_records_fallback_reason() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");

        let report = ConfigManager::load_report_from(&path).unwrap();
        assert_eq!(report.outcome, LoadOutcome::Missing);
        assert_eq!(report.fallback_reason(), None);

        std::fs::write(&path, "{ not json").unwrap();
        let report = ConfigManager::load_report_from(&path).unwrap();
        assert_eq!(report.config, DeckConfig::default());
        assert!(report.fallback_reason().unwrap().starts_with("Failed to parse"));

        std::fs::write(
            &path,
            r#"{ "deck": { "total_slides": 18446744073709551615, "credits_slide": 0 } }"#,
        )
        .unwrap();
        let report = ConfigManager::load_report_from(&path).unwrap();
        assert_eq!(report.config, DeckConfig::default());
        assert!(report.fallback_reason().unwrap().contains("exceeds"));

        ConfigManager::save_to(&DeckConfig::default(), &path).unwrap();
        let report = ConfigManager::load_report_from(&path).unwrap();
        assert_eq!(report.outcome, LoadOutcome::Loaded);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");

        let mut config = DeckConfig::default();
        config.deck.credits_slide = 42;

        assert!(matches!(
            ConfigManager::save_to(&config, &path),
            Err(DeckError::InvalidConfig(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_default_location_round_trip() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);

        ConfigManager::save(&DeckConfig::default()).unwrap();
        assert!(temp_dir.path().join("config.json").exists());
        assert_eq!(ConfigManager::load().unwrap(), DeckConfig::default());
    }
}
