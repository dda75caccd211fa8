//! Configuration data models
//!
//! This module defines the data structures used for deck configuration.
//! Every section has a `Default` matching the stock nine-slide deck, so a
//! missing or partial `config.json` still yields a working presentation.

use crate::credits::CreditsPlan;
use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Largest deck the navigator will build
pub const MAX_SLIDES: usize = 1_000;

/// Largest scroll distance, in either direction, for one arrow-key press
pub const MAX_SCROLL_STEP: i32 = 10_000;

/// Stock appreciation messages for the credits team
const DEFAULT_APPRECIATION: [(&str, &str); 5] = [
    ("Mayank", "SYSTEM LEADER - PROTOCOL ACTIVATED!"),
    ("Vaishnavi", "RESEARCH MODULE - EXCELLENCE ACHIEVED!"),
    ("Rushikesh", "TECH CORE - INNOVATION PROTOCOL!"),
    ("Aditya", "CREATIVE ENGINE - VISION ENHANCED!"),
    ("Shubham", "DATA MATRIX - INSIGHTS PROCESSED!"),
];

/// Top-level deck configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Shape of the deck
    pub deck: DeckSettings,
    /// Transition and settle durations
    pub timing: TransitionTimings,
    /// Credits slide choreography
    pub credits: CreditsPlan,
    /// Input layer tuning
    pub input: InputSettings,
    /// Appreciation popup message per credits member name
    pub appreciation: BTreeMap<String, String>,
    /// Logging preferences
    pub logging: LogSettings,
}

/// Number of slides and the designated credits slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    /// Total number of slides (N)
    pub total_slides: usize,
    /// Zero-based index of the credits slide
    pub credits_slide: usize,
}

/// Durations of the transition effect (D1) and the settle delay (D2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTimings {
    /// Overlay duration for ordinary navigation
    pub digital_ms: u64,
    /// Overlay duration for the credits entry effect
    pub glitch_ms: u64,
    /// Delay before the navigator accepts the next request
    pub settle_ms: u64,
}

/// Input layer settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Minimum horizontal displacement for a swipe
    pub swipe_threshold: f32,
    /// Scroll distance for a single arrow-key press
    pub scroll_step: i32,
    /// Whether pointer/touch input may replay the credits sequence
    pub replay_via_pointer: bool,
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            deck: DeckSettings::default(),
            timing: TransitionTimings::default(),
            credits: CreditsPlan::default(),
            input: InputSettings::default(),
            appreciation: DEFAULT_APPRECIATION
                .iter()
                .map(|(name, message)| ((*name).to_string(), (*message).to_string()))
                .collect(),
            logging: LogSettings::default(),
        }
    }
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            total_slides: 9,
            credits_slide: 8,
        }
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            digital_ms: 600,
            glitch_ms: 800,
            settle_ms: 400,
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            scroll_step: 100,
            replay_via_pointer: false,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DeckConfig {
    /// Check the invariants the navigator and sequencer rely on
    pub fn validate(&self) -> Result<()> {
        if self.deck.total_slides == 0 {
            return Err(DeckError::InvalidConfig(
                "deck must contain at least one slide".to_string(),
            ));
        }
        if self.deck.total_slides > MAX_SLIDES {
            return Err(DeckError::InvalidConfig(format!(
                "deck of {} slides exceeds the limit of {MAX_SLIDES}",
                self.deck.total_slides
            )));
        }
        if self.deck.credits_slide >= self.deck.total_slides {
            return Err(DeckError::InvalidConfig(format!(
                "credits slide {} is outside a deck of {} slides",
                self.deck.credits_slide, self.deck.total_slides
            )));
        }
        if self.timing.settle_ms == 0 {
            return Err(DeckError::InvalidConfig(
                "settle delay must be greater than zero".to_string(),
            ));
        }
        if !self.input.swipe_threshold.is_finite() || self.input.swipe_threshold < 0.0 {
            return Err(DeckError::InvalidConfig(format!(
                "swipe threshold {} must be a non-negative number",
                self.input.swipe_threshold
            )));
        }
        if !(-MAX_SCROLL_STEP..=MAX_SCROLL_STEP).contains(&self.input.scroll_step) {
            return Err(DeckError::InvalidConfig(format!(
                "scroll step {} is outside -{MAX_SCROLL_STEP}..={MAX_SCROLL_STEP}",
                self.input.scroll_step
            )));
        }
        self.credits.validate()
    }

    /// Appreciation message for a credits member
    pub fn appreciation_message(&self, name: &str) -> String {
        self.appreciation
            .get(name)
            .cloned()
            .unwrap_or_else(|| format!("SYSTEM ACK: {name}!"))
    }
}
