//! Error types for the LWW graph.
//!
//! Graph mutators only ever fail with [`GraphError::InvalidOperation`].
//! [`LwwGraphError`] is the umbrella type for everything else (config loading).

mod config_error;
mod graph_error;

pub use config_error::ConfigError;
pub use graph_error::{GraphError, GraphOperation};

/// Result alias for guarded graph mutators.
pub type GraphResult<T> = Result<T, GraphError>;

/// Result alias for workspace-level operations.
pub type LwwGraphResult<T> = Result<T, LwwGraphError>;

/// Umbrella error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum LwwGraphError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
