//! Credits timing table
//!
//! The plan is creative configuration, not computed: each cue reveals one
//! element of the credits slide at a fixed offset from the start of the
//! sequence, and a final celebration effect closes the show.

use crate::error::{DeckError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One timed reveal in the credits choreography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsCue {
    /// Element identifier on the credits slide (e.g. `leader`)
    pub key: String,
    /// Named visual state applied to the element when the cue fires
    pub visual_state: String,
    /// Offset from sequence start in milliseconds
    pub delay_ms: u64,
}

impl CreditsCue {
    /// Cue whose visual state is derived from its key
    pub fn new(key: impl Into<String>, delay_ms: u64) -> Self {
        let key = key.into();
        Self {
            visual_state: format!("animate-{key}"),
            key,
            delay_ms,
        }
    }
}

/// Immutable credits schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsPlan {
    /// Reveals in strictly increasing delay order
    pub cues: Vec<CreditsCue>,
    /// Offset of the terminal celebration effect
    pub celebration_delay_ms: u64,
}

impl Default for CreditsPlan {
    fn default() -> Self {
        Self {
            cues: vec![
                CreditsCue::new("leader", 500),
                CreditsCue::new("member1", 2_800),
                CreditsCue::new("member2", 3_200),
                CreditsCue::new("member3", 3_600),
                CreditsCue::new("member4", 4_000),
                CreditsCue::new("footer", 5_000),
            ],
            celebration_delay_ms: 6_000,
        }
    }
}

impl CreditsPlan {
    /// Reject plans whose timing would not be strictly ordered
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.cues.len());
        let mut last_delay: Option<u64> = None;

        for cue in &self.cues {
            if cue.key.is_empty() {
                return Err(DeckError::InvalidConfig(
                    "credits cue with an empty key".to_string(),
                ));
            }
            if !seen.insert(cue.key.as_str()) {
                return Err(DeckError::InvalidConfig(format!(
                    "credits cue '{}' appears more than once",
                    cue.key
                )));
            }
            if last_delay.is_some_and(|last| cue.delay_ms <= last) {
                return Err(DeckError::InvalidConfig(format!(
                    "credits cue '{}' at {}ms is not after the previous cue",
                    cue.key, cue.delay_ms
                )));
            }
            last_delay = Some(cue.delay_ms);
        }

        if last_delay.is_some_and(|last| self.celebration_delay_ms <= last) {
            return Err(DeckError::InvalidConfig(format!(
                "celebration at {}ms must come after the last reveal",
                self.celebration_delay_ms
            )));
        }

        Ok(())
    }

    /// Element keys in cue order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cues.iter().map(|cue| cue.key.as_str())
    }

    /// Number of scheduled steps, celebration included
    pub fn step_count(&self) -> usize {
        self.cues.len() + 1
    }
}
