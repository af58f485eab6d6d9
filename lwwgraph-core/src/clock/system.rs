use chrono::Utc;

use super::{TimeSource, Timestamp};

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}
