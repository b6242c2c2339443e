//! Test clocks: deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use campus_core::clock::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// The instant every fixture clock starts from: 2026-01-15 10:00:00 UTC.
///
/// # Panics
///
/// Never; the literal is a valid timestamp.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by `step` on every call, starting at `start`.
/// Used where ordering by timestamp matters (e.g. the notification ledger).
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    /// Create a clock whose first reading is `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let current = *next;
        *next = current + self.step;
        current
    }
}
