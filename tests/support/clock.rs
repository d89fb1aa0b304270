// tests/support/clock.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use cinemawords::application::ports::time::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Starts at a fixed instant and moves one second forward on every read, so
/// rows written in sequence get distinct, ordered timestamps.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}
