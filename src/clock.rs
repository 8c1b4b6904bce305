//! Time source used for timestamps and progress rate limiting.

use chrono::{DateTime, FixedOffset, Local, TimeDelta};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A single reading of the clock.
///
/// `instant` drives rate limiting and is immune to wall-clock jumps;
/// `wall` is what gets formatted into the timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Now {
    pub instant: Instant,
    pub wall: DateTime<FixedOffset>,
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Now;
}

/// The real clock, in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Now {
        Now {
            instant: Instant::now(),
            wall: Local::now().fixed_offset(),
        }
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Now>>,
}

impl ManualClock {
    pub fn new(wall: DateTime<FixedOffset>) -> Self {
        Self {
            now: Arc::new(Mutex::new(Now {
                instant: Instant::now(),
                wall,
            })),
        }
    }

    /// Move both the monotonic and the wall clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        now.instant += by;
        now.wall += TimeDelta::from_std(by).unwrap_or(TimeDelta::zero());
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Now {
        *self.now.lock()
    }
}
