//! Replica-facing graph type.

mod lww_graph;

pub use lww_graph::LwwGraph;
