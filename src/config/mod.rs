//! Configuration management module
//!
//! This module handles loading, saving, and validating the deck
//! configuration. Configuration is stored in `$DECKPILOT_HOME/config.json`
//! with atomic writes to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::{ConfigManager, LoadOutcome, LoadReport};
pub use models::{
    DeckConfig, DeckSettings, InputSettings, LogSettings, MAX_SCROLL_STEP, MAX_SLIDES,
    TransitionTimings,
};
