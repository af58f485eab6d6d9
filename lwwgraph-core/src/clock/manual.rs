use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Duration;

use super::{TimeSource, Timestamp};

/// Externally controlled time source.
///
/// Clones share the same instant, so a test can keep one handle and give
/// another to each replica it builds.
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Arc<Mutex<Timestamp>>,
}

impl ManualClock {
    /// Create a clock pinned at `instant`.
    pub fn new(instant: Timestamp) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    /// Create a clock pinned at the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::new(Timestamp::UNIX_EPOCH)
    }

    /// Pin the clock at `instant`.
    pub fn set(&self, instant: Timestamp) {
        *self.lock() = instant;
    }

    /// Move the clock by `delta` and return the new instant.
    pub fn advance(&self, delta: Duration) -> Timestamp {
        let mut guard = self.lock();
        *guard += delta;
        *guard
    }

    // A poisoned lock still holds a valid timestamp.
    fn lock(&self) -> MutexGuard<'_, Timestamp> {
        self.instant.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::at_epoch()
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        *self.lock()
    }
}
