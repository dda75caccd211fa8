//! Slide navigation state machine
//!
//! Owns the current slide index and enforces single-flight transitions: a
//! request is accepted only when it targets a different, existing slide and no
//! earlier transition is still settling.

use crate::config::TransitionTimings;
use crate::navigator::{Deck, DisplayState, NavigationState};
use crate::render::{RenderEvent, SharedSink};
use crate::scheduler::TimerQueue;
use tracing::{debug, info};

/// Style of the full-screen transition overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Sweep used for ordinary navigation
    Digital,
    /// Glitch used when the credits sequence starts
    Glitch,
}

impl TransitionKind {
    /// Overlay duration (D1) for this kind
    pub fn duration_ms(self, timings: &TransitionTimings) -> u64 {
        match self {
            TransitionKind::Digital => timings.digital_ms,
            TransitionKind::Glitch => timings.glitch_ms,
        }
    }
}

/// Active slide before and after an accepted transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    /// Slide that was active before the request
    pub previous: usize,
    /// Slide that is active now
    pub current: usize,
}

/// Receives a notification for every accepted transition
///
/// Observers run synchronously, right after the display state is published
/// and before the settle delay starts.
pub trait SlideObserver: Send {
    /// Called with the slide change and the time of the request
    fn on_slide_changed(&mut self, change: SlideChange, now_ms: u64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigatorTimer {
    Settle,
}

/// Slide navigator
pub struct SlideNavigator {
    deck: Deck,
    state: NavigationState,
    timings: TransitionTimings,
    timers: TimerQueue<NavigatorTimer>,
    observers: Vec<Box<dyn SlideObserver>>,
    sink: SharedSink,
}

impl SlideNavigator {
    /// Create a navigator positioned on the first slide
    pub fn new(deck: Deck, timings: TransitionTimings, sink: SharedSink) -> Self {
        Self {
            deck,
            state: NavigationState::default(),
            timings,
            timers: TimerQueue::new(),
            observers: Vec::new(),
            sink,
        }
    }

    /// Register an observer for slide changes
    pub fn subscribe(&mut self, observer: Box<dyn SlideObserver>) {
        self.observers.push(observer);
    }

    /// Advance one slide; ignored on the last slide or mid-transition
    pub fn next(&mut self, now_ms: u64) -> bool {
        let current = self.state.current_index;
        if current >= self.deck.last_index() {
            debug!("Next ignored: already on the last slide");
            return false;
        }
        self.begin_transition(current + 1, now_ms)
    }

    /// Go back one slide; ignored on the first slide or mid-transition
    pub fn previous(&mut self, now_ms: u64) -> bool {
        let current = self.state.current_index;
        if current == 0 {
            debug!("Previous ignored: already on the first slide");
            return false;
        }
        self.begin_transition(current - 1, now_ms)
    }

    /// Jump to `target`; ignored when out of range, already active, or mid-transition
    pub fn go_to(&mut self, target: usize, now_ms: u64) -> bool {
        if !self.deck.contains(target) {
            debug!(
                "Go-to ignored: slide index {} outside deck of {}",
                target,
                self.deck.len()
            );
            return false;
        }
        if target == self.state.current_index {
            debug!("Go-to ignored: slide {} is already active", target + 1);
            return false;
        }
        self.begin_transition(target, now_ms)
    }

    /// Fire due navigator timers
    pub fn tick(&mut self, now_ms: u64) {
        while let Some((_, timer)) = self.timers.pop_due(now_ms) {
            match timer {
                NavigatorTimer::Settle => {
                    let slide = self.state.current_index;
                    self.sink.render(RenderEvent::ScrollReset { slide });
                    self.state.is_transitioning = false;
                    debug!("Transition settled on slide {}", slide + 1);
                }
            }
        }
    }

    /// Publish the current display state without navigating
    pub fn publish_display(&self) {
        self.sink.render(RenderEvent::Display(self.display_state()));
    }

    /// Derived chrome for the current slide
    pub fn display_state(&self) -> DisplayState {
        DisplayState::derive(self.state.current_index, self.deck.len())
    }

    /// Zero-based active slide
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Whether a transition is still settling
    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    /// Snapshot of the navigation state
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Deck being navigated
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Whether the credits slide is active
    pub fn is_on_credits(&self) -> bool {
        self.deck.is_credits(self.state.current_index)
    }

    /// Earliest pending navigator deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn begin_transition(&mut self, target: usize, now_ms: u64) -> bool {
        if self.state.is_transitioning {
            debug!(
                "Navigation to slide {} ignored: transition in flight",
                target + 1
            );
            return false;
        }

        let previous = self.state.current_index;
        self.state.is_transitioning = true;

        let kind = TransitionKind::Digital;
        self.sink.render(RenderEvent::TransitionEffect {
            kind,
            duration_ms: kind.duration_ms(&self.timings),
        });

        self.state.current_index = target;
        info!("Slide {} -> {}", previous + 1, target + 1);

        self.publish_display();
        self.sink
            .render(RenderEvent::RestartSlideAnimations { slide: target });

        let change = SlideChange {
            previous,
            current: target,
        };
        for observer in &mut self.observers {
            observer.on_slide_changed(change, now_ms);
        }

        self.timers
            .schedule_after(now_ms, self.timings.settle_ms, NavigatorTimer::Settle);
        true
    }
}
