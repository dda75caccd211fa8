//! `deckpilot` - Terminal slide presentation controller
//!
//! Runs the deck described by `$DECKPILOT_HOME/config.json` (defaults when
//! absent), reading navigation commands from stdin and printing the render
//! layer's view of the presentation to stdout.

mod console;

use anyhow::{Context, Result, anyhow};
use deckpilot::{
    config::ConfigManager, controller::PresentationController, error::get_user_friendly_error,
    input::Intent, render::RenderEvent, utils,
};
use parking_lot::Mutex;
use std::io::BufRead;
use std::sync::{Arc, mpsc};
use tracing::{info, warn};

fn main() -> Result<()> {
    let report = ConfigManager::load_report().context("Failed to load deck configuration")?;

    utils::init_logging(&report.config.logging).context("Failed to initialize logging system")?;
    let config_path = ConfigManager::get_config_path();
    info!("Configuration path: {}", config_path.display());
    report.log(&config_path);
    if let Some(reason) = report.fallback_reason() {
        eprintln!("{reason}");
    }
    let config = report.config;

    let (render_tx, render_rx) = mpsc::channel::<RenderEvent>();
    let printer = console::spawn_printer(render_rx);

    let controller = match PresentationController::new(&config, Arc::new(render_tx)) {
        Ok(controller) => Arc::new(Mutex::new(controller)),
        Err(e) => {
            eprintln!("{}", get_user_friendly_error(&e));
            return Err(e).context("Failed to build presentation");
        }
    };

    let (intent_tx, intent_rx) = mpsc::channel::<Intent>();
    let event_loop = PresentationController::spawn_event_loop(Arc::clone(&controller), intent_rx);

    println!("{}", console::HELP);

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Failed to read command from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match console::parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        if command == console::Command::Help {
            println!("{}", console::HELP);
            continue;
        }

        let intent = {
            let guard = controller.lock();
            console::resolve(command, &guard.key_context(), guard.input_settings())
        };
        let Some(intent) = intent else {
            continue;
        };

        let quit = intent == Intent::Shutdown;
        if intent_tx.send(intent).is_err() {
            warn!("Event loop stopped before the command could be delivered");
            break;
        }
        if quit {
            break;
        }
    }

    // stdin closed without quit: stop the loop the same way
    let _ = intent_tx.send(Intent::Shutdown);
    event_loop
        .join()
        .map_err(|_| anyhow!("Presentation event loop panicked"))?;

    drop(controller);
    printer
        .join()
        .map_err(|_| anyhow!("Render printer panicked"))?;

    info!("deckpilot shutting down");
    Ok(())
}
