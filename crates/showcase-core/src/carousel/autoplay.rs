use crate::schedule::Interval;

/// Periodic "advance" source for the carousel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AutoplayTimer {
    interval: Interval,
}

impl AutoplayTimer {
    pub const fn new(period_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
        }
    }

    /// Idempotent; returns `true` only when the timer was actually started.
    pub fn start(&mut self, now_ms: u64) -> bool {
        self.interval.start(now_ms)
    }

    /// Idempotent; returns whether the timer was running.
    pub fn stop(&mut self) -> bool {
        self.interval.stop()
    }

    pub const fn is_running(&self) -> bool {
        self.interval.is_running()
    }

    pub const fn period_ms(&self) -> u64 {
        self.interval.period_ms()
    }

    pub const fn next_tick_ms(&self) -> Option<u64> {
        self.interval.next_ms()
    }

    /// Consumes a due tick and reports whether it should advance the carousel.
    ///
    /// A tick that lands while hidden or mid-transition is lost.
    pub fn poll(&mut self, now_ms: u64, visible: bool, transitioning: bool) -> bool {
        self.interval.poll(now_ms) && visible && !transitioning
    }
}
