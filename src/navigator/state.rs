//! Navigation state owned by the navigator

/// Current position and the single-flight transition flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Zero-based active slide, always within the deck
    pub current_index: usize,
    /// True from an accepted request until its settle delay has elapsed
    pub is_transitioning: bool,
}
