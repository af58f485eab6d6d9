//! Per-map accounting of what a merge changed.

/// What one map gained from a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapMergeStats {
    /// Keys the local map had never seen.
    pub inserted: usize,
    /// Keys whose timestamp moved to the remote's later value.
    pub advanced: usize,
}

impl MapMergeStats {
    pub fn changes(&self) -> usize {
        self.inserted + self.advanced
    }
}

/// Outcome of merging a remote store into a local one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub vertex_added: MapMergeStats,
    pub vertex_removed: MapMergeStats,
    pub edge_added: MapMergeStats,
    pub edge_removed: MapMergeStats,
}

impl MergeReport {
    /// Total keys inserted or advanced across all four maps.
    pub fn changes(&self) -> usize {
        self.maps().iter().map(MapMergeStats::changes).sum()
    }

    pub fn inserted(&self) -> usize {
        self.maps().iter().map(|m| m.inserted).sum()
    }

    pub fn advanced(&self) -> usize {
        self.maps().iter().map(|m| m.advanced).sum()
    }

    /// True when the local store already dominated the remote.
    pub fn is_noop(&self) -> bool {
        self.changes() == 0
    }

    fn maps(&self) -> [MapMergeStats; 4] {
        [
            self.vertex_added,
            self.vertex_removed,
            self.edge_added,
            self.edge_removed,
        ]
    }
}
