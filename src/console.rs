//! Terminal frontend
//!
//! Reads one command per line from stdin and prints render events to stdout.
//! Commands are translated through the same keymap, pointer and swipe rules a
//! graphical frontend would use.

use deckpilot::config::InputSettings;
use deckpilot::input::{
    Intent, Key, KeyContext, PointerTarget, classify_swipe, map_key, map_pointer,
};
use deckpilot::navigator::{DisplayState, SlideStatus};
use deckpilot::render::RenderEvent;
use std::sync::mpsc;
use std::thread::JoinHandle;

/// Help text listing every console command
pub const HELP: &str = "\
commands:
  n, next          next slide
  p, prev          previous slide
  g <k>            go to slide k (1-based)
  home, end        first / last slide
  up, down         scroll the current slide
  r                replay credits (credits slide only)
  click            click the credits slide
  swipe <dx> <dy>  swipe gesture
  thanks <name>    appreciation popup (credits slide only)
  help             show this help
  q, quit          exit";

/// Parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Simulated key press
    Key(Key),
    /// Simulated click
    Pointer(PointerTarget),
    /// Simulated swipe displacement
    Swipe {
        /// Horizontal displacement
        dx: f32,
        /// Vertical displacement
        dy: f32,
    },
    /// Appreciation for a credits member
    Thanks(String),
    /// Print the help text
    Help,
    /// Leave the presentation
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };

    let command = match head {
        "n" | "next" => Command::Key(Key::ArrowRight),
        "p" | "prev" | "previous" => Command::Key(Key::ArrowLeft),
        "home" => Command::Key(Key::Home),
        "end" => Command::Key(Key::End),
        "up" => Command::Key(Key::ArrowUp),
        "down" => Command::Key(Key::ArrowDown),
        "r" | "R" => Command::Key(Key::Char('r')),
        "click" => Command::Pointer(PointerTarget::CreditsSlide),
        "g" | "goto" => {
            let slide: usize = parts
                .next()
                .ok_or("usage: g <slide number>")?
                .parse()
                .map_err(|_| "slide number must be a positive integer".to_string())?;
            let index = slide
                .checked_sub(1)
                .ok_or("slide numbers start at 1")?;
            Command::Pointer(PointerTarget::Indicator(index))
        }
        "swipe" => {
            let mut coord = || -> Result<f32, String> {
                parts
                    .next()
                    .ok_or("usage: swipe <dx> <dy>")?
                    .parse()
                    .map_err(|_| "swipe displacement must be a number".to_string())
            };
            let dx = coord()?;
            let dy = coord()?;
            Command::Swipe { dx, dy }
        }
        "thanks" => {
            let name = parts.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err("usage: thanks <name>".to_string());
            }
            Command::Thanks(name)
        }
        "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(command)
}

/// Translate a command into an intent for the current navigator state
pub fn resolve(command: Command, ctx: &KeyContext, settings: &InputSettings) -> Option<Intent> {
    match command {
        Command::Key(key) => map_key(key, ctx, settings),
        Command::Pointer(target) => map_pointer(target, ctx, settings),
        Command::Swipe { dx, dy } => classify_swipe(dx, dy, settings.swipe_threshold),
        Command::Thanks(name) => Some(Intent::Appreciate(name)),
        Command::Quit => Some(Intent::Shutdown),
        Command::Help => None,
    }
}

/// Spawn the thread printing render events until every sender is dropped
pub fn spawn_printer(receiver: mpsc::Receiver<RenderEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for event in receiver {
            if let Some(line) = format_event(&event) {
                println!("{line}");
            }
        }
    })
}

/// Console line for an event; `None` for events with nothing to show
pub fn format_event(event: &RenderEvent) -> Option<String> {
    match event {
        RenderEvent::Labels(labels) => Some(format!(
            "controls: {}",
            labels
                .iter()
                .map(|label| label.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )),
        RenderEvent::Display(display) => Some(format_display(display)),
        RenderEvent::TransitionEffect { kind, duration_ms } => {
            Some(format!("~~ {kind:?} transition ({duration_ms}ms) ~~"))
        }
        RenderEvent::Scroll { slide, delta } => {
            Some(format!("scroll slide {} by {delta}", slide + 1))
        }
        RenderEvent::Reveal { key, .. } => Some(format!("  + {key}")),
        RenderEvent::CreditsReset { .. } => Some("credits reset".to_string()),
        RenderEvent::Celebration => Some("*** celebration ***".to_string()),
        RenderEvent::Appreciation { message, .. } => Some(format!("[{message}]")),
        RenderEvent::RestartSlideAnimations { .. } | RenderEvent::ScrollReset { .. } => None,
    }
}

fn format_display(display: &DisplayState) -> String {
    let dots: String = display
        .statuses
        .iter()
        .map(|status| match status {
            SlideStatus::Prior => '#',
            SlideStatus::Active => '@',
            SlideStatus::Upcoming => '.',
        })
        .collect();
    format!(
        "[{}] {} {:>3.0}%  {}prev {}next",
        display.counter_text,
        dots,
        display.progress_percent(),
        if display.previous_enabled { "" } else { "-" },
        if display.next_enabled { "" } else { "-" },
    )
}
