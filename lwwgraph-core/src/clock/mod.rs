//! Time-source capability consulted once per graph mutation.
//!
//! The graph never reads time on its own: it holds an `Arc<dyn TimeSource>`
//! handed to it at construction. Production code uses [`SystemClock`];
//! tests and simulations use [`ManualClock`] to pin the instant.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use lwwgraph_core::clock::{ManualClock, TimeSource};
//!
//! let clock = ManualClock::new(Utc.timestamp_opt(1_000, 0).unwrap());
//! let handle = clock.clone();
//! handle.advance(Duration::seconds(5));
//! assert_eq!(clock.now(), Utc.timestamp_opt(1_005, 0).unwrap());
//! ```

mod manual;
mod system;

use std::fmt::Debug;

use chrono::{DateTime, Utc};

pub use manual::ManualClock;
pub use system::SystemClock;

/// Instant recorded against every add/remove.
pub type Timestamp = DateTime<Utc>;

/// Source of "now" for graph mutations.
pub trait TimeSource: Send + Sync + Debug {
    fn now(&self) -> Timestamp;
}
