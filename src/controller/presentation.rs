//! Presentation controller implementation

use crate::config::{DeckConfig, InputSettings};
use crate::credits::{CreditsObserver, CreditsSequencer, SharedSequencer};
use crate::error::Result;
use crate::input::{Intent, KeyContext};
use crate::navigator::{Deck, SlideNavigator};
use crate::render::{RenderEvent, SharedSink, control_labels};
use parking_lot::Mutex;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Longest wait on the intent channel when no deadline is pending
const IDLE_POLL_MS: u64 = 100;

/// Presentation logic controller
pub struct PresentationController {
    config: DeckConfig,
    navigator: SlideNavigator,
    sequencer: SharedSequencer,
    sink: SharedSink,
}

impl PresentationController {
    /// Build the navigator and credits sequencer described by `config`
    pub fn new(config: &DeckConfig, sink: SharedSink) -> Result<Self> {
        config.validate()?;

        let deck = Deck::from_settings(&config.deck)?;
        let credits_index = deck.credits_index();

        let sequencer = Arc::new(Mutex::new(CreditsSequencer::new(
            config.credits.clone(),
            &config.timing,
            Arc::clone(&sink),
        )));

        let mut navigator = SlideNavigator::new(deck, config.timing, Arc::clone(&sink));
        navigator.subscribe(Box::new(CreditsObserver::new(
            Arc::clone(&sequencer),
            credits_index,
        )));

        info!(
            "Presentation ready: {} slides, credits on slide {}",
            config.deck.total_slides,
            credits_index + 1
        );

        Ok(Self {
            config: config.clone(),
            navigator,
            sequencer,
            sink,
        })
    }

    /// Publish the control labels and the initial display state
    pub fn start(&self, now_ms: u64) {
        self.sink
            .render(RenderEvent::Labels(control_labels(self.navigator.deck().len())));
        self.navigator.publish_display();

        if self.navigator.is_on_credits() {
            self.sequencer.lock().trigger(now_ms);
        }
    }

    /// Apply one intent; returns whether it changed anything
    pub fn handle_intent(&mut self, intent: Intent, now_ms: u64) -> bool {
        debug!("Handling intent {:?}", intent);
        match intent {
            Intent::Next => self.navigator.next(now_ms),
            Intent::Previous => self.navigator.previous(now_ms),
            Intent::GoTo(index) => self.navigator.go_to(index, now_ms),
            Intent::ReplayCredits => {
                if self.navigator.is_on_credits() {
                    self.sequencer.lock().replay(now_ms)
                } else {
                    debug!("Credits replay ignored: credits slide is not active");
                    false
                }
            }
            Intent::Scroll(delta) => {
                self.sink.render(RenderEvent::Scroll {
                    slide: self.navigator.current_index(),
                    delta,
                });
                true
            }
            Intent::Appreciate(name) => {
                if !self.navigator.is_on_credits() {
                    debug!("Appreciation for '{}' ignored: credits slide is not active", name);
                    return false;
                }
                let message = self.config.appreciation_message(&name);
                self.sink.render(RenderEvent::Appreciation { name, message });
                true
            }
            Intent::Shutdown => {
                self.shutdown();
                true
            }
        }
    }

    /// Fire every deferred action due at `now_ms`
    pub fn tick(&mut self, now_ms: u64) {
        self.navigator.tick(now_ms);
        self.sequencer.lock().tick(now_ms);
    }

    /// Earliest pending deadline across navigator and sequencer
    pub fn next_deadline(&self) -> Option<u64> {
        let credits = self.sequencer.lock().next_deadline();
        match (self.navigator.next_deadline(), credits) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel the credits sequence, as when the page unloads
    pub fn shutdown(&mut self) {
        self.sequencer.lock().reset();
        info!("Presentation shut down on slide {}", self.navigator.current_index() + 1);
    }

    /// Slide navigator
    pub fn navigator(&self) -> &SlideNavigator {
        &self.navigator
    }

    /// Credits sequencer shared with the navigator's observer
    pub fn sequencer(&self) -> SharedSequencer {
        Arc::clone(&self.sequencer)
    }

    /// Configuration the controller was built from
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Input tuning from the configuration
    pub fn input_settings(&self) -> &InputSettings {
        &self.config.input
    }

    /// Keymap context for the current navigator state
    pub fn key_context(&self) -> KeyContext {
        KeyContext::from_navigator(&self.navigator)
    }

    /// Fire due timers, then apply `intent` at the same instant
    ///
    /// An intent arriving on the settle deadline sees the navigator settled.
    pub fn dispatch(&mut self, intent: Intent, now_ms: u64) -> bool {
        self.tick(now_ms);
        self.handle_intent(intent, now_ms)
    }

    /// Run the event loop on the current thread until shutdown.
    pub fn run(&mut self, receiver: &mpsc::Receiver<Intent>) {
        drive(self, receiver);
    }

    /// Spawn the event loop in a background thread. Only locks the controller
    /// while handling one intent or firing due timers.
    pub fn spawn_event_loop(
        controller: Arc<Mutex<PresentationController>>,
        receiver: mpsc::Receiver<Intent>,
    ) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || drive(controller, &receiver))
    }
}

/// Scoped access to a controller, owned or behind a lock
trait ControllerAccess {
    fn with<R>(&mut self, f: impl FnOnce(&mut PresentationController) -> R) -> R;
}

impl ControllerAccess for &mut PresentationController {
    fn with<R>(&mut self, f: impl FnOnce(&mut PresentationController) -> R) -> R {
        f(self)
    }
}

impl ControllerAccess for Arc<Mutex<PresentationController>> {
    fn with<R>(&mut self, f: impl FnOnce(&mut PresentationController) -> R) -> R {
        f(&mut self.lock())
    }
}

fn drive(mut controller: impl ControllerAccess, receiver: &mpsc::Receiver<Intent>) {
    let origin = Instant::now();
    controller.with(|c| c.start(elapsed_ms(origin)));

    info!("Entering presentation event loop");
    loop {
        let now = elapsed_ms(origin);
        let deadline = controller.with(|c| {
            c.tick(now);
            c.next_deadline()
        });

        match receiver.recv_timeout(wait_until(deadline, now)) {
            Ok(Intent::Shutdown) => break,
            Ok(intent) => {
                let now = elapsed_ms(origin);
                controller.with(|c| c.dispatch(intent, now));
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                warn!("Intent channel disconnected. Exiting event loop.");
                break;
            }
        }
    }

    controller.with(PresentationController::shutdown);
    info!("Presentation event loop exited");
}

fn elapsed_ms(origin: Instant) -> u64 {
    u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn wait_until(deadline: Option<u64>, now_ms: u64) -> Duration {
    let wait = deadline.map_or(IDLE_POLL_MS, |due| due.saturating_sub(now_ms));
    Duration::from_millis(wait.min(IDLE_POLL_MS))
}
