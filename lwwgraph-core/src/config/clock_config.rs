use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::{ManualClock, SystemClock, TimeSource, Timestamp};
use crate::errors::ConfigError;

/// Which time source a graph is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    #[default]
    System,
    /// Externally controlled; for tests and simulations.
    Manual,
}

/// Time-source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub source: ClockSource,
    /// Starting instant for a manual clock. Defaults to the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_at: Option<Timestamp>,
}

impl ClockConfig {
    /// `fixed_at` only makes sense for a manual clock.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source == ClockSource::System && self.fixed_at.is_some() {
            return Err(ConfigError::InvalidClock {
                reason: "fixed_at requires source = \"manual\"".to_string(),
            });
        }
        Ok(())
    }

    /// Build the configured time source.
    pub fn build(&self) -> Result<Arc<dyn TimeSource>, ConfigError> {
        self.validate()?;
        Ok(match self.source {
            ClockSource::System => Arc::new(SystemClock),
            ClockSource::Manual => Arc::new(self.build_manual()),
        })
    }

    /// Build a manual clock regardless of `source`, keeping `fixed_at`.
    ///
    /// Simulations use this to keep a handle they can advance.
    pub fn build_manual(&self) -> ManualClock {
        match self.fixed_at {
            Some(instant) => ManualClock::new(instant),
            None => ManualClock::at_epoch(),
        }
    }
}
