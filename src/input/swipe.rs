//! Swipe gesture recognition
//!
//! A swipe counts only when its horizontal displacement is strictly greater
//! than the threshold and strictly dominant over the vertical displacement.
//! Swiping right (positive dx) goes back; swiping left goes forward.

use crate::input::Intent;

/// Classify a completed gesture by its displacement
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Intent> {
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    if dx.abs() <= threshold || dx.abs() <= dy.abs() {
        return None;
    }
    if dx > 0.0 {
        Some(Intent::Previous)
    } else {
        Some(Intent::Next)
    }
}

/// Tracks one touch from start to end
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    /// Tracker using `threshold` as the minimum horizontal displacement
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    /// Record where a touch began
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the touch and classify it; a touch that never began yields nothing
    pub fn end(&mut self, x: f32, y: f32) -> Option<Intent> {
        let (start_x, start_y) = self.start.take()?;
        classify_swipe(x - start_x, y - start_y, self.threshold)
    }

    /// Abandon the current touch
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Whether a touch is in progress
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
