//! Tracing setup: structured logging with span definitions.

pub mod spans;

use lwwgraph_core::config::ObservabilityConfig;
use lwwgraph_core::constants::{LOG_ENV_VAR, VERSION};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `LWWGRAPH_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    install(filter, true)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

/// Initialize tracing from configuration. `LWWGRAPH_LOG` still wins when set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    if installed {
        tracing::debug!(version = VERSION, "tracing initialized");
    }
    installed
}
