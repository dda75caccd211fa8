//! Credits choreography sequencer
//!
//! Runs the credits plan at most once per activation of the credits slide.
//! Every step is an independent deferred action; resetting cancels all of them
//! before the stage is returned to its hidden state, so no step of an aborted
//! run can fire afterwards.

use crate::config::TransitionTimings;
use crate::credits::{CreditsPlan, CreditsStage};
use crate::navigator::TransitionKind;
use crate::render::{RenderEvent, SharedSink};
use crate::scheduler::{TimerHandle, TimerQueue};
use smallvec::SmallVec;
use tracing::{debug, info};

/// Lifecycle of one credits run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePhase {
    /// Nothing scheduled, stage hidden
    Idle,
    /// Steps pending
    Running,
    /// Every step has fired
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreditsStep {
    Cue(usize),
    Celebration,
}

/// Credits sequencer
pub struct CreditsSequencer {
    plan: CreditsPlan,
    stage: CreditsStage,
    glitch_ms: u64,
    phase: SequencePhase,
    triggered: bool,
    pending: SmallVec<[TimerHandle; 8]>,
    timers: TimerQueue<CreditsStep>,
    sink: SharedSink,
}

impl CreditsSequencer {
    /// Create an idle sequencer over a stage holding every plan element
    pub fn new(plan: CreditsPlan, timings: &TransitionTimings, sink: SharedSink) -> Self {
        let stage = CreditsStage::new(plan.keys());
        Self::with_stage(plan, stage, timings, sink)
    }

    /// Create an idle sequencer over an explicit stage
    pub fn with_stage(
        plan: CreditsPlan,
        stage: CreditsStage,
        timings: &TransitionTimings,
        sink: SharedSink,
    ) -> Self {
        Self {
            plan,
            stage,
            glitch_ms: TransitionKind::Glitch.duration_ms(timings),
            phase: SequencePhase::Idle,
            triggered: false,
            pending: SmallVec::new(),
            timers: TimerQueue::new(),
            sink,
        }
    }

    /// Start the choreography; ignored while a run is active or completed
    pub fn trigger(&mut self, now_ms: u64) -> bool {
        if self.triggered {
            debug!("Credits trigger ignored: sequence already {:?}", self.phase);
            return false;
        }

        self.stage.hide_all();
        self.triggered = true;
        self.phase = SequencePhase::Running;
        info!("Credits sequence started ({} steps)", self.plan.step_count());

        self.sink.render(RenderEvent::TransitionEffect {
            kind: TransitionKind::Glitch,
            duration_ms: self.glitch_ms,
        });

        for (index, cue) in self.plan.cues.iter().enumerate() {
            let handle = self
                .timers
                .schedule_after(now_ms, cue.delay_ms, CreditsStep::Cue(index));
            self.pending.push(handle);
        }
        let handle = self.timers.schedule_after(
            now_ms,
            self.plan.celebration_delay_ms,
            CreditsStep::Celebration,
        );
        self.pending.push(handle);

        true
    }

    /// Cancel every pending step and return the stage to hidden
    pub fn reset(&mut self) {
        if !self.triggered {
            return;
        }

        let cancelled = self
            .pending
            .drain(..)
            .filter_map(|handle| self.timers.cancel(handle))
            .count();
        self.triggered = false;
        self.phase = SequencePhase::Idle;

        let hidden = self.stage.hide_all();
        self.sink.render(RenderEvent::CreditsReset { hidden });
        info!("Credits sequence reset ({} pending steps cancelled)", cancelled);
    }

    /// Restart the choreography from its first step
    pub fn replay(&mut self, now_ms: u64) -> bool {
        info!("Credits replay requested");
        self.reset();
        self.trigger(now_ms)
    }

    /// Fire every step whose deadline has passed; returns how many fired
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some((handle, step)) = self.timers.pop_due(now_ms) {
            self.pending.retain(|pending| *pending != handle);
            self.fire(step);
            fired += 1;
        }

        if self.phase == SequencePhase::Running && self.pending.is_empty() {
            self.phase = SequencePhase::Completed;
            info!("Credits sequence completed");
        }
        fired
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SequencePhase {
        self.phase
    }

    /// Whether a run is active or completed for the current activation
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Number of steps still waiting to fire
    pub fn pending_steps(&self) -> usize {
        self.pending.len()
    }

    /// Reveal flags of the credits elements
    pub fn stage(&self) -> &CreditsStage {
        &self.stage
    }

    /// Plan driving the choreography
    pub fn plan(&self) -> &CreditsPlan {
        &self.plan
    }

    /// Earliest pending step deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn fire(&mut self, step: CreditsStep) {
        match step {
            CreditsStep::Cue(index) => {
                let Some(cue) = self.plan.cues.get(index) else {
                    return;
                };
                if !self.stage.reveal(&cue.key) {
                    debug!("Credits step '{}' skipped: element not on stage", cue.key);
                    return;
                }
                debug!("Credits step '{}' revealed", cue.key);
                self.sink.render(RenderEvent::Reveal {
                    key: cue.key.clone(),
                    visual_state: cue.visual_state.clone(),
                });
            }
            CreditsStep::Celebration => {
                debug!("Credits celebration");
                self.sink.render(RenderEvent::Celebration);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credits::RevealState;
    use crate::test_utils::drain_events;
    use std::sync::{Arc, mpsc};

    fn sequencer() -> (CreditsSequencer, mpsc::Receiver<RenderEvent>) {
        let (tx, rx) = mpsc::channel();
        (
            CreditsSequencer::new(
                CreditsPlan::default(),
                &TransitionTimings::default(),
                Arc::new(tx),
            ),
            rx,
        )
    }

    fn revealed_keys(events: &[RenderEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|event| match event {
                RenderEvent::Reveal { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_trigger_schedules_every_step() {
        let (mut seq, rx) = sequencer();
        assert!(seq.trigger(1_000));

        assert_eq!(seq.phase(), SequencePhase::Running);
        assert_eq!(seq.pending_steps(), 7);
        assert_eq!(seq.next_deadline(), Some(1_500));
        assert_eq!(
            drain_events(&rx),
            vec![RenderEvent::TransitionEffect {
                kind: TransitionKind::Glitch,
                duration_ms: 800
            }]
        );
    }

    #[test]
    fn test_steps_fire_on_schedule() {
        let (mut seq, rx) = sequencer();
        seq.trigger(0);
        drain_events(&rx);

        assert_eq!(seq.tick(499), 0);
        assert_eq!(seq.tick(500), 1);
        assert_eq!(
            drain_events(&rx),
            vec![RenderEvent::Reveal {
                key: "leader".to_string(),
                visual_state: "animate-leader".to_string()
            }]
        );

        assert_eq!(seq.tick(3_200), 2);
        assert_eq!(revealed_keys(&drain_events(&rx)), vec!["member1", "member2"]);
        assert_eq!(seq.phase(), SequencePhase::Running);
    }

    #[test]
    fn test_full_run_completes_once() {
        let (mut seq, rx) = sequencer();
        seq.trigger(0);
        drain_events(&rx);

        assert_eq!(seq.tick(6_000), 7);
        let events = drain_events(&rx);
        assert_eq!(
            revealed_keys(&events),
            vec!["leader", "member1", "member2", "member3", "member4", "footer"]
        );
        assert_eq!(events.last(), Some(&RenderEvent::Celebration));
        assert_eq!(seq.phase(), SequencePhase::Completed);

        assert_eq!(seq.tick(60_000), 0);
        assert!(drain_events(&rx).is_empty());
    }

    #[test]
    fn test_retrigger_while_running_is_noop() {
        let (mut seq, rx) = sequencer();
        assert!(seq.trigger(0));
        assert!(!seq.trigger(100));
        assert_eq!(seq.pending_steps(), 7);

        seq.tick(10_000);
        assert!(!seq.trigger(10_000), "completed run must not restart on its own");
        let events = drain_events(&rx);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, RenderEvent::Celebration))
                .count(),
            1
        );
    }

    #[test]
    fn test_reset_cancels_pending_steps() {
        let (mut seq, rx) = sequencer();
        seq.trigger(0);
        seq.tick(3_000);
        assert_eq!(seq.stage().state("member1"), Some(RevealState::Revealed));
        drain_events(&rx);

        seq.reset();
        assert_eq!(seq.phase(), SequencePhase::Idle);
        assert!(!seq.is_triggered());
        assert_eq!(seq.pending_steps(), 0);
        assert_eq!(seq.next_deadline(), None);
        assert!(seq.stage().is_all_hidden());

        let events = drain_events(&rx);
        assert!(matches!(
            &events[..],
            [RenderEvent::CreditsReset { hidden }] if hidden.len() == 6
        ));

        assert_eq!(seq.tick(100_000), 0);
        assert!(drain_events(&rx).is_empty());
    }

    #[test]
    fn test_reset_when_idle_is_silent() {
        let (mut seq, rx) = sequencer();
        seq.reset();
        assert!(drain_events(&rx).is_empty());
    }

    #[test]
    fn test_replay_restarts_from_first_step() {
        let (mut seq, rx) = sequencer();
        seq.trigger(0);
        seq.tick(6_000);
        assert_eq!(seq.phase(), SequencePhase::Completed);
        drain_events(&rx);

        assert!(seq.replay(10_000));
        assert_eq!(seq.phase(), SequencePhase::Running);
        assert!(seq.stage().is_all_hidden());
        assert_eq!(seq.next_deadline(), Some(10_500));

        seq.tick(10_500);
        let events = drain_events(&rx);
        assert!(matches!(events[0], RenderEvent::CreditsReset { .. }));
        assert!(matches!(
            events[1],
            RenderEvent::TransitionEffect {
                kind: TransitionKind::Glitch,
                ..
            }
        ));
        assert_eq!(revealed_keys(&events), vec!["leader"]);
    }

    #[test]
    fn test_missing_element_is_skipped() {
        let (tx, rx) = mpsc::channel();
        let plan = CreditsPlan::default();
        let stage = CreditsStage::new(["leader", "member1", "member2", "member4", "footer"]);
        let mut seq =
            CreditsSequencer::with_stage(plan, stage, &TransitionTimings::default(), Arc::new(tx));

        seq.trigger(0);
        seq.tick(6_000);

        let events = drain_events(&rx);
        assert_eq!(
            revealed_keys(&events),
            vec!["leader", "member1", "member2", "member4", "footer"]
        );
        assert_eq!(events.last(), Some(&RenderEvent::Celebration));
        assert_eq!(seq.phase(), SequencePhase::Completed);
    }
}
