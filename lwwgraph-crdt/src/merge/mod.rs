//! Stateless merge orchestrator for [`ElementStore`] replicas.
//!
//! Every map is merged per key by keeping the later timestamp; an absent key
//! counts as earlier than any timestamp. Nothing is ever deleted, so merge
//! is commutative, associative, and idempotent.

mod report;

use std::collections::BTreeMap;

use lwwgraph_core::clock::Timestamp;

use crate::element::VertexId;
use crate::store::ElementStore;

pub use report::{MapMergeStats, MergeReport};

/// Stateless merge orchestrator.
///
/// Provides three operations:
/// - `merge_into`: absorb a remote store into a local one, in place
/// - `merged`: the same merge as a new store, leaving both inputs intact
/// - `delta`: the part of a store a remote has not yet seen
pub struct MergeResolver;

impl MergeResolver {
    /// Absorb `remote` into `local`, keeping the later timestamp per key.
    pub fn merge_into<V: VertexId>(
        local: &mut ElementStore<V>,
        remote: &ElementStore<V>,
    ) -> MergeReport {
        MergeReport {
            vertex_added: merge_map(&mut local.vertex_added, &remote.vertex_added),
            vertex_removed: merge_map(&mut local.vertex_removed, &remote.vertex_removed),
            edge_added: merge_map(&mut local.edge_added, &remote.edge_added),
            edge_removed: merge_map(&mut local.edge_removed, &remote.edge_removed),
        }
    }

    /// Merge two stores, returning the merged state.
    pub fn merged<V: VertexId>(
        local: &ElementStore<V>,
        remote: &ElementStore<V>,
    ) -> ElementStore<V> {
        let mut merged = local.clone();
        Self::merge_into(&mut merged, remote);
        merged
    }

    /// Entries of `local` that are later than, or missing from, `remote`.
    ///
    /// Merging the delta into `remote` has the same effect as merging all
    /// of `local`.
    pub fn delta<V: VertexId>(
        local: &ElementStore<V>,
        remote: &ElementStore<V>,
    ) -> ElementStore<V> {
        ElementStore {
            vertex_added: newer_entries(&local.vertex_added, &remote.vertex_added),
            vertex_removed: newer_entries(&local.vertex_removed, &remote.vertex_removed),
            edge_added: newer_entries(&local.edge_added, &remote.edge_added),
            edge_removed: newer_entries(&local.edge_removed, &remote.edge_removed),
        }
    }
}

fn merge_map<K: Ord + Clone>(
    local: &mut BTreeMap<K, Timestamp>,
    remote: &BTreeMap<K, Timestamp>,
) -> MapMergeStats {
    let mut stats = MapMergeStats::default();
    for (key, &remote_ts) in remote {
        match local.get_mut(key) {
            Some(local_ts) => {
                if remote_ts > *local_ts {
                    *local_ts = remote_ts;
                    stats.advanced += 1;
                }
            }
            None => {
                local.insert(key.clone(), remote_ts);
                stats.inserted += 1;
            }
        }
    }
    stats
}

fn newer_entries<K: Ord + Clone>(
    local: &BTreeMap<K, Timestamp>,
    remote: &BTreeMap<K, Timestamp>,
) -> BTreeMap<K, Timestamp> {
    local
        .iter()
        .filter(|(key, ts)| remote.get(*key).map_or(true, |remote_ts| *ts > remote_ts))
        .map(|(key, ts)| (key.clone(), *ts))
        .collect()
}
