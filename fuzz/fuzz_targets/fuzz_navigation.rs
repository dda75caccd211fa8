#![no_main]

use deckpilot::config::DeckConfig;
use deckpilot::controller::PresentationController;
use deckpilot::input::Intent;
use deckpilot::render::DiscardSink;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    // Each byte pair is one intent plus a clock advance
    let Ok(mut controller) = PresentationController::new(&DeckConfig::default(), Arc::new(DiscardSink))
    else {
        return;
    };
    let mut now = 0u64;
    controller.start(now);

    for pair in data.chunks(2) {
        let op = pair[0];
        let advance = u64::from(pair.get(1).copied().unwrap_or(0)) * 10;
        let intent = match op % 6 {
            0 => Intent::Next,
            1 => Intent::Previous,
            2 => Intent::GoTo(usize::from(op / 6)),
            3 => Intent::ReplayCredits,
            4 => Intent::Scroll(i32::from(op)),
            _ => Intent::Appreciate(format!("member{}", op % 4)),
        };
        controller.handle_intent(intent, now);
        now += advance;
        controller.tick(now);

        let nav = controller.navigator();
        assert!(nav.current_index() < nav.deck().len());
        assert_eq!(nav.display_state().active_count(), 1);
    }
});
