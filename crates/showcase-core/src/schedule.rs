//! Deferred work expressed as deadlines polled against a millisecond clock.
//!
//! Nothing here owns a thread or a callback. Widgets keep a [`Deadline`] or an
//! [`Interval`] next to the state it guards and poll it from `tick(now_ms)`,
//! so tests drive time with a [`MockClock`] instead of waiting.

use core::cell::Cell;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Manually advanced clock for tests and simulated hosts.
#[derive(Debug, Default)]
pub struct MockClock {
    now_ms: Cell<u64>,
}

impl MockClock {
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Moves the clock forward and returns the new time.
    pub fn advance(&self, delta_ms: u64) -> u64 {
        let next = self.now_ms.get().saturating_add(delta_ms);
        self.now_ms.set(next);
        next
    }

    /// Jumps to `now_ms`; ignored if it would move the clock backwards.
    pub fn set(&self, now_ms: u64) {
        if now_ms > self.now_ms.get() {
            self.now_ms.set(now_ms);
        }
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

/// Cancellable one-shot deadline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Deadline {
    due_ms: Option<u64>,
}

impl Deadline {
    pub const fn idle() -> Self {
        Self { due_ms: None }
    }

    pub const fn at(due_ms: u64) -> Self {
        Self {
            due_ms: Some(due_ms),
        }
    }

    /// Arms the deadline `delay_ms` after `now_ms`, replacing any pending one.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Disarms the deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.due_ms.take().is_some()
    }

    pub const fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    pub const fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.due_ms.map(|due| due.saturating_sub(now_ms))
    }

    /// Returns `true` exactly once, on the first poll at or after the due time.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// Cancellable periodic timer.
///
/// A poll that lands several periods late fires once and realigns to the next
/// period boundary; missed periods are dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval {
    period_ms: u64,
    next_ms: Option<u64>,
}

impl Interval {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms: if period_ms == 0 { 1 } else { period_ms },
            next_ms: None,
        }
    }

    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub const fn is_running(&self) -> bool {
        self.next_ms.is_some()
    }

    pub const fn next_ms(&self) -> Option<u64> {
        self.next_ms
    }

    /// Starts the timer. No-op (returns `false`) if already running.
    pub fn start(&mut self, now_ms: u64) -> bool {
        if self.next_ms.is_some() {
            return false;
        }
        self.next_ms = Some(now_ms.saturating_add(self.period_ms));
        true
    }

    /// Stops the timer. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        self.next_ms.take().is_some()
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(next) = self.next_ms else {
            return false;
        };
        if now_ms < next {
            return false;
        }

        let missed = (now_ms - next) / self.period_ms;
        self.next_ms = Some(next.saturating_add((missed + 1) * self.period_ms));
        true
    }
}
