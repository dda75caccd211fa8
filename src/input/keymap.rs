//! Keyboard mapping
//!
//! | Key                                | Intent                         |
//! |------------------------------------|--------------------------------|
//! | `ArrowRight`, `Space`, `PageDown`  | [`Intent::Next`]               |
//! | `ArrowLeft`, `PageUp`              | [`Intent::Previous`]           |
//! | `Home`                             | [`Intent::GoTo`] first slide   |
//! | `End`                              | [`Intent::GoTo`] last slide    |
//! | `ArrowUp` / `ArrowDown`            | [`Intent::Scroll`] by one step |
//! | `r`, `R` (credits slide only)      | [`Intent::ReplayCredits`]      |
//!
//! Every key is ignored while a transition is in flight.

use crate::config::InputSettings;
use crate::input::Intent;
use crate::navigator::SlideNavigator;

/// Keyboard key relevant to the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Left arrow
    ArrowLeft,
    /// Right arrow
    ArrowRight,
    /// Up arrow
    ArrowUp,
    /// Down arrow
    ArrowDown,
    /// Space bar
    Space,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Home
    Home,
    /// End
    End,
    /// Enter / Return
    Enter,
    /// Any printable character
    Char(char),
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowLeft"`, `" "`, `"r"`)
    pub fn parse(name: &str) -> Option<Self> {
        let key = match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            " " | "Space" | "Spacebar" => Key::Space,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "Enter" => Key::Enter,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

/// Navigator facts the keymap depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    /// Active slide
    pub current: usize,
    /// Number of slides
    pub total: usize,
    /// Index of the credits slide
    pub credits_slide: usize,
    /// Whether a transition is still settling
    pub transitioning: bool,
}

impl KeyContext {
    /// Snapshot the context from a navigator
    pub fn from_navigator(navigator: &SlideNavigator) -> Self {
        Self {
            current: navigator.current_index(),
            total: navigator.deck().len(),
            credits_slide: navigator.deck().credits_index(),
            transitioning: navigator.is_transitioning(),
        }
    }

    fn on_credits(&self) -> bool {
        self.current == self.credits_slide
    }
}

/// Map a key press on the document to an intent
pub fn map_key(key: Key, ctx: &KeyContext, settings: &InputSettings) -> Option<Intent> {
    if ctx.transitioning {
        return None;
    }

    match key {
        Key::ArrowRight | Key::Space | Key::PageDown => Some(Intent::Next),
        Key::ArrowLeft | Key::PageUp => Some(Intent::Previous),
        Key::Home => Some(Intent::GoTo(0)),
        Key::End => ctx.total.checked_sub(1).map(Intent::GoTo),
        Key::ArrowUp => Some(Intent::Scroll(settings.scroll_step.saturating_neg())),
        Key::ArrowDown => Some(Intent::Scroll(settings.scroll_step)),
        Key::Char('r' | 'R') if ctx.on_credits() => Some(Intent::ReplayCredits),
        Key::Enter | Key::Char(_) => None,
    }
}

/// Map a key press on a focused slide indicator
pub fn indicator_key(key: Key, index: usize) -> Option<Intent> {
    match key {
        Key::Enter | Key::Space => Some(Intent::GoTo(index)),
        _ => None,
    }
}
