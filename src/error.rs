//! Error types for `deckpilot`
//!
//! Navigation itself never fails: out-of-range requests, missing credits
//! elements and re-entrant triggers are ignored. The errors defined
//! here cover the ambient concerns around the deck (configuration files,
//! logging setup and I/O).
//!
//! Error variants use `#[source]` to preserve error chains.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `deckpilot`
#[derive(Debug, Error)]
pub enum DeckError {
    /// Configuration values violate a deck invariant
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be located or written
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Logging subsystem could not be installed
    #[error("Logging setup failed: {0}")]
    LoggingError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for `deckpilot` operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Convert an error to a message suitable for the console
pub fn get_user_friendly_error(error: &DeckError) -> String {
    match error {
        DeckError::InvalidConfig(reason) => format!(
            "The deck configuration is not usable:\n\n{reason}\n\n\
             Fix config.json or delete it to fall back to the defaults."
        ),
        DeckError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Check that DECKPILOT_HOME points to a writable directory."
            .to_string(),
        DeckError::LoggingError(_) => "Logging could not be started.\n\n\
             The presentation still runs, but no log file will be written."
            .to_string(),
        DeckError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        DeckError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The presentation will use default settings."
            )
        }
    }
}
