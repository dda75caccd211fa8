//! Discrete requests delivered to the presentation controller

/// User intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Advance one slide
    Next,
    /// Go back one slide
    Previous,
    /// Jump to a zero-based slide index
    GoTo(usize),
    /// Restart the credits sequence from its first step
    ReplayCredits,
    /// Scroll the active slide's content by a signed distance
    Scroll(i32),
    /// Show the appreciation popup for a credits member
    Appreciate(String),
    /// Stop the controller's event loop
    Shutdown,
}

impl Intent {
    /// Whether this intent asks the navigator to change slides
    pub fn is_navigation(&self) -> bool {
        matches!(self, Intent::Next | Intent::Previous | Intent::GoTo(_))
    }
}
