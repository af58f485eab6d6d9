//! Read-only queries over the effective (tombstone-filtered) graph.
//!
//! Stored edges are directional keys, but both queries treat each present
//! edge as an undirected connection.

pub mod neighbors;
pub mod path;

pub use neighbors::connected_vertices;
pub use path::find_path;
