//! Presentation controller module
//!
//! This module wires the input layer, the slide navigator and the credits
//! sequencer together and drives their timers.
//!
//! # Overview
//!
//! The presentation controller is the central coordinator that:
//! - **Receives intents** from the input layer over a channel
//! - **Dispatches navigation** to the `SlideNavigator`
//! - **Routes replay requests** to the `CreditsSequencer` while the credits
//!   slide is active
//! - **Fires deferred actions** (settle delays, credits steps) when due
//! - **Resets the credits sequence** when the event loop exits
//!
//! # Event Flow
//!
//! ```text
//! input → Intent → PresentationController → SlideNavigator ─→ RenderEvent
//!                                  │               │
//!                                  │        CreditsObserver
//!                                  │               ↓
//!                                  └──────→ CreditsSequencer ─→ RenderEvent
//! ```
//!
//! # Timing
//!
//! The event loop blocks on the intent channel until the earliest pending
//! deadline, polling at least every 100ms. Time is measured in milliseconds
//! since the loop started and passed explicitly to every operation.

pub mod presentation;

pub use presentation::PresentationController;
