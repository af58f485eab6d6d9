//! Span names emitted by the graph, for filter directives and log queries.
//!
//! ```
//! use lwwgraph_observability::tracing_setup::spans::names;
//!
//! let directive = format!("[{}]=debug", names::PATH);
//! assert_eq!(directive, "[lwwgraph.path]=debug");
//! ```

/// Span names as constants for programmatic use.
pub mod names {
    /// Info span around `LwwGraph::merge`.
    pub const MERGE: &str = "lwwgraph.merge";
    /// Debug span around `LwwGraph::path`.
    pub const PATH: &str = "lwwgraph.path";
}
