//! Injectable time source, so temporal behavior is testable without
//! real sleeps and recorded sessions replay on their own timeline.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current wall-clock time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
}

/// Real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Externally driven clock. Clones share the same instant, so a test or
/// replay driver can keep one handle and advance the copy it injected.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: i64) {
        self.now.set(ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();
        handle.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
        handle.set(10_000);
        assert_eq!(clock.now_ms(), 10_000);
    }

    #[test]
    fn mock_clock_drives_expectations() {
        let mut clock = MockClock::new();
        clock.expect_now_ms().return_const(42i64);
        assert_eq!(clock.now_ms(), 42);
    }
}
