#![no_main]

use deckpilot::config::DeckConfig;
use deckpilot::controller::PresentationController;
use deckpilot::render::DiscardSink;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    // Parsing and validation must never panic; a config that validates must
    // also build a controller
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<DeckConfig>(s) {
            if config.validate().is_ok() {
                assert!(PresentationController::new(&config, Arc::new(DiscardSink)).is_ok());
            }
        }
    }
});
