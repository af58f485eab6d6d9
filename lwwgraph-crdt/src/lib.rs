//! # lwwgraph-crdt
//!
//! A last-writer-wins graph CRDT. Replicas add and remove vertices and
//! edges independently and converge by merging.
//!
//! ## Components
//!
//! - [`ElementStore`]: the four add/remove timestamp maps and the LWW
//!   containment rules, with referential-integrity guards on mutation
//! - [`MergeResolver`]: per-key latest-timestamp merge, pure and in place,
//!   plus delta extraction
//! - [`traversal`]: neighbor discovery and backtracking path search over
//!   the effective graph
//! - [`LwwGraph`]: a store bound to a time source
//!
//! ## Presence
//!
//! A vertex is present iff its add timestamp is strictly after its remove
//! timestamp (or it has no remove). An edge additionally needs both
//! endpoints present. Equal timestamps resolve to removed.
//!
//! ## Mathematical Guarantees
//!
//! Merge satisfies:
//! 1. **Commutativity**: `merge(A, B) == merge(B, A)`
//! 2. **Associativity**: `merge(A, merge(B, C)) == merge(merge(A, B), C)`
//! 3. **Idempotency**: `merge(A, A) == A`

pub mod element;
pub mod graph;
pub mod merge;
pub mod store;
pub mod traversal;

// Re-export public API
pub use element::{Edge, VertexId};
pub use graph::LwwGraph;
pub use merge::{MapMergeStats, MergeReport, MergeResolver};
pub use store::ElementStore;
