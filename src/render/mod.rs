//! Render layer interface
//!
//! The deck never draws anything. The navigator and the credits sequencer
//! describe what changed as [`RenderEvent`]s and hand them to a
//! [`RenderSink`]; whatever sits behind the sink (a browser bridge, a terminal
//! printer, a test channel) owns every cosmetic effect.
//!
//! # Event Flow
//!
//! ```text
//! SlideNavigator ──┐
//!                  ├─→ RenderSink ─→ render layer
//! CreditsSequencer ┘
//! ```
//!
//! Delivery failures are logged and swallowed: a presentation must keep
//! running when nobody is watching.

pub mod labels;

use crate::navigator::{DisplayState, TransitionKind};
use std::sync::{Arc, mpsc};
use tracing::warn;

pub use labels::{ControlKind, ControlLabel, control_labels};

/// Change the render layer should apply
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// Accessibility labels for every interactive control
    Labels(Vec<ControlLabel>),
    /// Derived chrome after a transition (slide flags, progress, counter, buttons)
    Display(DisplayState),
    /// Full-screen transition overlay
    TransitionEffect {
        /// Overlay style
        kind: TransitionKind,
        /// How long the overlay stays visible
        duration_ms: u64,
    },
    /// Re-run the entrance animations of a slide's content
    RestartSlideAnimations {
        /// Slide whose content animates
        slide: usize,
    },
    /// Scroll the slide's content area back to the top
    ScrollReset {
        /// Newly settled slide
        slide: usize,
    },
    /// Scroll the active slide's content area
    Scroll {
        /// Active slide
        slide: usize,
        /// Signed scroll distance
        delta: i32,
    },
    /// Apply a named visual state to a credits element
    Reveal {
        /// Element identifier
        key: String,
        /// Visual state to apply
        visual_state: String,
    },
    /// Return every credits element to its hidden pre-animation state
    CreditsReset {
        /// Elements forced back to hidden
        hidden: Vec<String>,
    },
    /// Terminal celebration effect of the credits sequence
    Celebration,
    /// Appreciation popup for a credits member
    Appreciation {
        /// Member name as shown on the card
        name: String,
        /// Popup text
        message: String,
    },
}

/// Consumer of render events
pub trait RenderSink: Send + Sync {
    /// Deliver one event; must not block the event loop for long
    fn render(&self, event: RenderEvent);
}

/// Shared handle to a render sink
pub type SharedSink = Arc<dyn RenderSink>;

impl RenderSink for mpsc::Sender<RenderEvent> {
    fn render(&self, event: RenderEvent) {
        if let Err(e) = self.send(event) {
            warn!("Failed to send render event: {}", e);
        }
    }
}

/// Sink that drops every event (headless runs and benchmarks)
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl RenderSink for DiscardSink {
    fn render(&self, _event: RenderEvent) {}
}
