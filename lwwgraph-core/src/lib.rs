//! # lwwgraph-core
//!
//! Foundation crate for the LWW graph workspace.
//! Defines errors, config, constants, and the time-source capability.
//! Every other crate in the workspace depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;

// Re-export the most commonly used types at the crate root.
pub use clock::{ManualClock, SystemClock, TimeSource, Timestamp};
pub use config::LwwGraphConfig;
pub use errors::{GraphError, GraphOperation, GraphResult, LwwGraphError, LwwGraphResult};
