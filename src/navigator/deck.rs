//! Slides and their roles

use crate::config::{DeckSettings, MAX_SLIDES};
use crate::error::{DeckError, Result};

/// Designated role of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRole {
    /// Regular content slide
    Ordinary,
    /// The slide hosting the credits choreography
    Credits,
}

/// One slide, addressed by its zero-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    /// Zero-based position in the deck
    pub index: usize,
    /// Role of the slide
    pub role: SlideRole,
}

/// Fixed, ordered sequence of slides with exactly one credits slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
    credits_index: usize,
}

impl Deck {
    /// Build a deck of `total` slides with the credits slide at `credits_index`
    pub fn new(total: usize, credits_index: usize) -> Result<Self> {
        if total == 0 {
            return Err(DeckError::InvalidConfig(
                "deck must contain at least one slide".to_string(),
            ));
        }
        if total > MAX_SLIDES {
            return Err(DeckError::InvalidConfig(format!(
                "deck of {total} slides exceeds the limit of {MAX_SLIDES}"
            )));
        }
        if credits_index >= total {
            return Err(DeckError::InvalidConfig(format!(
                "credits slide {credits_index} is outside a deck of {total} slides"
            )));
        }

        let slides = (0..total)
            .map(|index| Slide {
                index,
                role: if index == credits_index {
                    SlideRole::Credits
                } else {
                    SlideRole::Ordinary
                },
            })
            .collect();

        Ok(Self {
            slides,
            credits_index,
        })
    }

    /// Build a deck from configuration
    pub fn from_settings(settings: &DeckSettings) -> Result<Self> {
        Self::new(settings.total_slides, settings.credits_slide)
    }

    /// Number of slides (N)
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; a deck holds at least one slide
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the last slide
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    /// Index of the credits slide
    pub fn credits_index(&self) -> usize {
        self.credits_index
    }

    /// Whether `index` addresses the credits slide
    pub fn is_credits(&self, index: usize) -> bool {
        index == self.credits_index
    }

    /// Slide at `index`, if it exists
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Whether `index` addresses a slide
    pub fn contains(&self, index: usize) -> bool {
        index < self.slides.len()
    }

    /// All slides in order
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
