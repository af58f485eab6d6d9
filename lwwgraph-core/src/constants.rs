/// Workspace version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "LWWGRAPH_LOG";
