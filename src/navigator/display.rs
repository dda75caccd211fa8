//! Derived presentation chrome

/// Transition styling status of a slide relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStatus {
    /// Slide before the active one
    Prior,
    /// The active slide
    Active,
    /// Slide after the active one
    Upcoming,
}

/// Everything the render layer needs to redraw the chrome after a transition
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Zero-based active slide
    pub active_index: usize,
    /// Per-slide status, one entry per slide
    pub statuses: Vec<SlideStatus>,
    /// `(active_index + 1) / N`
    pub progress_ratio: f64,
    /// Human readable counter, e.g. `"3 / 9"`
    pub counter_text: String,
    /// False only on the first slide
    pub previous_enabled: bool,
    /// False only on the last slide
    pub next_enabled: bool,
}

impl DisplayState {
    /// Derive the chrome for `active_index` in a deck of `total` slides
    #[expect(
        clippy::cast_precision_loss,
        reason = "Slide counts are tiny; the ratio is exact for any realistic deck"
    )]
    pub fn derive(active_index: usize, total: usize) -> Self {
        let statuses = (0..total)
            .map(|index| match index.cmp(&active_index) {
                std::cmp::Ordering::Less => SlideStatus::Prior,
                std::cmp::Ordering::Equal => SlideStatus::Active,
                std::cmp::Ordering::Greater => SlideStatus::Upcoming,
            })
            .collect();

        Self {
            active_index,
            statuses,
            progress_ratio: (active_index + 1) as f64 / total as f64,
            counter_text: format!("{} / {}", active_index + 1, total),
            previous_enabled: active_index != 0,
            next_enabled: active_index + 1 != total,
        }
    }

    /// Progress as a percentage for width-style progress bars
    pub fn progress_percent(&self) -> f64 {
        self.progress_ratio * 100.0
    }

    /// Indices of slides marked prior
    pub fn prior_slides(&self) -> impl Iterator<Item = usize> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .filter(|(_, status)| **status == SlideStatus::Prior)
            .map(|(index, _)| index)
    }

    /// Number of slides marked active (always one for a derived state)
    pub fn active_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|status| **status == SlideStatus::Active)
            .count()
    }
}
