//! Credits choreography module
//!
//! The credits slide runs a one-shot, timed reveal of its elements followed
//! by a celebration effect:
//!
//! - [`CreditsPlan`]: the ordered cue table (element key, delay from trigger)
//! - [`CreditsStage`]: which of those elements are present and revealed
//! - [`CreditsSequencer`]: schedules, cancels and replays the plan
//! - [`CreditsObserver`]: starts the sequence when the credits slide becomes
//!   active and resets it when the credits slide is left

pub mod plan;
pub mod sequencer;
pub mod stage;

pub use plan::{CreditsCue, CreditsPlan};
pub use sequencer::{CreditsSequencer, SequencePhase};
pub use stage::{CreditsStage, RevealState};

use crate::navigator::{SlideChange, SlideObserver};
use parking_lot::Mutex;
use std::sync::Arc;

/// Sequencer shared between the navigator's observer list and the controller
pub type SharedSequencer = Arc<Mutex<CreditsSequencer>>;

/// Slide observer that drives the credits sequencer
pub struct CreditsObserver {
    sequencer: SharedSequencer,
    credits_index: usize,
}

impl CreditsObserver {
    /// Observe transitions into and out of `credits_index`
    pub fn new(sequencer: SharedSequencer, credits_index: usize) -> Self {
        Self {
            sequencer,
            credits_index,
        }
    }
}

impl SlideObserver for CreditsObserver {
    fn on_slide_changed(&mut self, change: SlideChange, now_ms: u64) {
        if change.current == self.credits_index {
            self.sequencer.lock().trigger(now_ms);
        } else if change.previous == self.credits_index {
            self.sequencer.lock().reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransitionTimings;
    use crate::navigator::{Deck, SlideNavigator};
    use crate::render::DiscardSink;

    const SETTLE: u64 = 400;

    fn wired() -> (SlideNavigator, SharedSequencer) {
        let sink: crate::render::SharedSink = Arc::new(DiscardSink);
        let timings = TransitionTimings::default();
        let sequencer = Arc::new(Mutex::new(CreditsSequencer::new(
            CreditsPlan::default(),
            &timings,
            Arc::clone(&sink),
        )));
        let mut nav = SlideNavigator::new(Deck::new(9, 8).unwrap(), timings, sink);
        nav.subscribe(Box::new(CreditsObserver::new(Arc::clone(&sequencer), 8)));
        (nav, sequencer)
    }

    #[test]
    fn test_entering_credits_triggers() {
        let (mut nav, sequencer) = wired();
        nav.go_to(8, 0);
        assert_eq!(sequencer.lock().phase(), SequencePhase::Running);
        assert_eq!(sequencer.lock().next_deadline(), Some(500));
    }

    #[test]
    fn test_leaving_credits_resets() {
        let (mut nav, sequencer) = wired();
        nav.go_to(8, 0);
        nav.tick(SETTLE);
        sequencer.lock().tick(1_000);

        nav.previous(1_000);
        let seq = sequencer.lock();
        assert_eq!(seq.phase(), SequencePhase::Idle);
        assert_eq!(seq.pending_steps(), 0);
        assert!(seq.stage().is_all_hidden());
    }

    #[test]
    fn test_other_transitions_leave_sequencer_alone() {
        let (mut nav, sequencer) = wired();
        nav.next(0);
        nav.tick(SETTLE);
        nav.next(SETTLE);
        assert_eq!(sequencer.lock().phase(), SequencePhase::Idle);
    }

    #[test]
    fn test_reentering_credits_restarts_sequence() {
        let (mut nav, sequencer) = wired();
        nav.go_to(8, 0);
        nav.tick(SETTLE);
        sequencer.lock().tick(6_000);
        assert_eq!(sequencer.lock().phase(), SequencePhase::Completed);

        nav.previous(6_000);
        nav.tick(6_000 + SETTLE);
        nav.next(7_000);
        let seq = sequencer.lock();
        assert_eq!(seq.phase(), SequencePhase::Running);
        assert_eq!(seq.next_deadline(), Some(7_500));
    }
}
