// tests/support/mocks/util.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}

/// Starts at `fixed_now()` and moves forward one second per call, so posts
/// created in sequence have distinct, increasing timestamps.
pub struct StepClock {
    ticks: Mutex<i64>,
}

impl Default for StepClock {
    fn default() -> Self {
        Self {
            ticks: Mutex::new(0),
        }
    }
}

impl blog_core::application::ports::time::Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        let now = fixed_now() + Duration::seconds(*ticks);
        *ticks += 1;
        now
    }
}

/// Deterministic stand-in for the UUID generator: `generated-1`, `generated-2`, ...
#[derive(Default)]
pub struct SequenceIds {
    next: Mutex<u32>,
}

impl blog_core::application::ports::util::IdGenerator for SequenceIds {
    fn generate(&self) -> String {
        let mut next = self.next.lock().unwrap();
        *next += 1;
        format!("generated-{next}")
    }
}
