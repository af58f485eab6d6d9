//! Workspace configuration loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the
//! defaults in [`defaults`].

pub mod clock_config;
pub mod defaults;
pub mod observability_config;

pub use clock_config::{ClockConfig, ClockSource};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LwwGraphConfig {
    pub clock: ClockConfig,
    pub observability: ObservabilityConfig,
}

impl LwwGraphConfig {
    /// Parse a TOML document, filling missing fields with defaults.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.clock.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
