//! Deferred action scheduling
//!
//! Every timed effect in the deck (the navigator's settle delay and each step
//! of the credits choreography) is a deferred action in a [`TimerQueue`].
//! Deadlines are absolute milliseconds on the caller's monotonic clock, so the
//! queue never reads the wall clock itself and tests can drive it with plain
//! numbers.
//!
//! # Ordering
//!
//! Actions fire in non-decreasing deadline order. Actions sharing a deadline
//! fire in the order they were scheduled.
//!
//! # Cancellation
//!
//! [`TimerQueue::cancel`] removes the entry outright. A cancelled action is
//! gone from the queue and cannot fire later.

pub mod timer_queue;

pub use timer_queue::{TimerHandle, TimerQueue};
