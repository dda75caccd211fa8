//! Cancellable deadline queue

use std::collections::BTreeMap;

/// Handle to a scheduled action
///
/// Handles are unique per queue. Cancelling a handle whose action already
/// fired (or was already cancelled) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    due_ms: u64,
    seq: u64,
}

impl TimerHandle {
    /// Absolute deadline of the action in milliseconds
    pub fn due_ms(&self) -> u64 {
        self.due_ms
    }
}

/// Deferred actions ordered by deadline, then by scheduling order
#[derive(Debug)]
pub struct TimerQueue<E> {
    entries: BTreeMap<TimerHandle, E>,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `action` to fire once `now_ms >= due_ms`
    pub fn schedule(&mut self, due_ms: u64, action: E) -> TimerHandle {
        let handle = TimerHandle {
            due_ms,
            seq: self.next_seq,
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        self.entries.insert(handle, action);
        handle
    }

    /// Schedule `action` to fire `delay_ms` after `now_ms`
    pub fn schedule_after(&mut self, now_ms: u64, delay_ms: u64, action: E) -> TimerHandle {
        self.schedule(now_ms.saturating_add(delay_ms), action)
    }

    /// Cancel a pending action, returning it if it had not fired yet
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<E> {
        self.entries.remove(&handle)
    }

    /// Remove and return the earliest action whose deadline has passed
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(TimerHandle, E)> {
        let first = self.entries.first_key_value()?.0;
        if first.due_ms > now_ms {
            return None;
        }
        self.entries.pop_first()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.first_key_value().map(|(handle, _)| handle.due_ms)
    }

    /// Whether `handle` is still waiting to fire
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    /// Number of pending actions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no action is pending
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending action
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
