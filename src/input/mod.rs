//! Input layer
//!
//! Turns raw user input into [`Intent`]s for the presentation controller:
//!
//! - [`keymap`]: keyboard keys and focused indicator activation
//! - [`pointer`]: clicks on the navigation buttons, indicators and credits
//! - [`swipe`]: horizontal swipe gestures
//!
//! Mapping is pure: every function takes the context it needs and returns an
//! optional intent, so the same rules apply whatever frontend feeds them.

pub mod intent;
pub mod keymap;
pub mod pointer;
pub mod swipe;

pub use intent::Intent;
pub use keymap::{Key, KeyContext, indicator_key, map_key};
pub use pointer::{PointerTarget, map_pointer};
pub use swipe::{SwipeTracker, classify_swipe};
