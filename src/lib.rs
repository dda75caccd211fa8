//! `deckpilot` - Slide presentation controller
//!
//! Drives a fixed deck of slides: bounds-checked, single-flight navigation
//! with a settle delay, derived display state for the render layer, and a
//! one-shot timed credits choreography that resets when its slide is left.
//! Uses an event-driven architecture with the `PresentationController`
//! receiving input intents, the `SlideNavigator` owning the active slide, and
//! the `CreditsSequencer` scheduling the credits reveal.
//!
//! Nothing here draws: every visible change is a `RenderEvent` delivered to a
//! `RenderSink`.

// Module declarations
pub mod config;
pub mod controller;
pub mod credits;
pub mod error;
pub mod input;
pub mod navigator;
pub mod render;
pub mod scheduler;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{DeckError, Result};
