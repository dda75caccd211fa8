//! Slide navigation module
//!
//! # Overview
//!
//! The navigator is the single owner of the active slide index. It:
//! - **Bounds-checks** every request (`next`, `previous`, `go_to`) and ignores
//!   the ones that cannot apply
//! - **Serialises transitions**: once a request is accepted, every further
//!   request is ignored until the settle delay has elapsed
//! - **Publishes display state** (slide flags, progress, counter, button
//!   states) to the render layer
//! - **Notifies observers** of each slide change, synchronously
//!
//! # Transition Steps
//!
//! 1. Mark the navigator as transitioning
//! 2. Announce the transition overlay (D1)
//! 3. Move the active index
//! 4. Publish the derived display state and notify observers
//! 5. After the settle delay (D2): reset the new slide's scroll position and
//!    accept requests again
//!
//! Invalid requests never fail loudly; they are logged at `debug` level and
//! dropped so the show keeps running.

pub mod deck;
pub mod display;
pub mod slide_navigator;
pub mod state;

pub use deck::{Deck, Slide, SlideRole};
pub use display::{DisplayState, SlideStatus};
pub use slide_navigator::{SlideChange, SlideNavigator, SlideObserver, TransitionKind};
pub use state::NavigationState;
