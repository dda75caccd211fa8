//! Pointer and touch clicks on deck controls

use crate::config::InputSettings;
use crate::input::{Intent, KeyContext};

/// Clickable element of the deck chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Previous-slide button
    PreviousButton,
    /// Next-slide button
    NextButton,
    /// Slide indicator dot
    Indicator(usize),
    /// Body of the credits slide
    CreditsSlide,
}

/// Map a click to an intent
///
/// Buttons and indicators always map; the navigator drops whatever cannot
/// apply. A click on the credits slide replays the sequence only when
/// `replay_via_pointer` is enabled and the credits slide is active.
pub fn map_pointer(
    target: PointerTarget,
    ctx: &KeyContext,
    settings: &InputSettings,
) -> Option<Intent> {
    match target {
        PointerTarget::PreviousButton => Some(Intent::Previous),
        PointerTarget::NextButton => Some(Intent::Next),
        PointerTarget::Indicator(index) => Some(Intent::GoTo(index)),
        PointerTarget::CreditsSlide => (settings.replay_via_pointer
            && ctx.current == ctx.credits_slide)
            .then_some(Intent::ReplayCredits),
    }
}
