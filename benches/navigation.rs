#![allow(clippy::unwrap_used)]
//! Benchmarks for navigation, credits timers and configuration parsing

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use deckpilot::config::DeckConfig;
use deckpilot::controller::PresentationController;
use deckpilot::input::Intent;
use deckpilot::navigator::DisplayState;
use deckpilot::render::DiscardSink;
use deckpilot::scheduler::TimerQueue;
use std::hint::black_box;
use std::sync::Arc;

fn controller() -> PresentationController {
    PresentationController::new(&DeckConfig::default(), Arc::new(DiscardSink)).unwrap()
}

fn bench_walkthrough(c: &mut Criterion) {
    c.bench_function("deck_walkthrough", |b| {
        b.iter(|| {
            let mut controller = controller();
            let mut now = 0;
            for _ in 0..8 {
                controller.handle_intent(black_box(Intent::Next), now);
                now += 400;
                controller.tick(now);
            }
            black_box(controller.navigator().current_index());
        });
    });
}

fn bench_credits_run(c: &mut Criterion) {
    c.bench_function("credits_full_run", |b| {
        b.iter(|| {
            let mut controller = controller();
            controller.handle_intent(Intent::GoTo(8), 0);
            for now in (0..=6_000).step_by(50) {
                controller.tick(black_box(now));
            }
            black_box(controller.next_deadline());
        });
    });
}

fn bench_display_derive(c: &mut Criterion) {
    c.bench_function("display_derive_100", |b| {
        b.iter(|| {
            let display = DisplayState::derive(black_box(42), black_box(100));
            black_box(display);
        });
    });
}

fn bench_timer_queue(c: &mut Criterion) {
    c.bench_function("timer_queue_schedule_cancel", |b| {
        b.iter(|| {
            let mut queue = TimerQueue::new();
            let handles: Vec<_> = (0..64u64)
                .map(|i| queue.schedule_after(0, i * 37 % 1_000, i))
                .collect();
            for handle in handles.iter().step_by(2) {
                queue.cancel(*handle);
            }
            while let Some(entry) = queue.pop_due(black_box(1_000)) {
                black_box(entry);
            }
        });
    });
}

fn bench_config_deserialization(c: &mut Criterion) {
    let json = serde_json::to_string(&DeckConfig::default()).unwrap();

    c.bench_function("config_deserialize", |b| {
        b.iter(|| {
            let config: DeckConfig = serde_json::from_str(black_box(&json)).unwrap();
            black_box(config.validate().is_ok());
        });
    });
}

criterion_group!(
    benches,
    bench_walkthrough,
    bench_credits_run,
    bench_display_derive,
    bench_timer_queue,
    bench_config_deserialization
);
criterion_main!(benches);
