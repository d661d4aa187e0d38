//! Result accumulation and the outcome handed back to callers.

use serde::Serialize;
use crate::model::{NodeId, Path};

/// Append-only, ordered collection of recorded paths.
///
/// No deduplication: distinct routes to the same endpoint are all kept.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    paths: Vec<Path>,
    limit: Option<usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self { paths: Vec::new(), limit }
    }

    /// Append a path. Returns false once the limit has been reached, in
    /// which case the path is dropped.
    pub fn push(&mut self, path: Path) -> bool {
        if self.is_full() {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.paths.len() >= limit)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }
}

/// A branch dropped because its relations could not be enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchWarning {
    pub node: NodeId,
    pub message: String,
}

/// Counters for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub frames_expanded: u64,
    pub candidates_examined: u64,
    pub skipped_direct_neighbor: u64,
    pub skipped_cycle: u64,
    pub pruned_no_match: u64,
    pub paths_recorded: u64,
    pub elapsed_ms: u64,
}

/// Everything a search produces.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub paths: Vec<Path>,
    pub warnings: Vec<SearchWarning>,
    pub stats: SearchStats,
    /// The configured result limit stopped the search early.
    pub truncated: bool,
}

impl SearchOutcome {
    /// Distinct endpoints, in first-seen order.
    pub fn endpoints(&self) -> Vec<NodeId> {
        let mut seen = hashbrown::HashSet::new();
        self.paths
            .iter()
            .map(Path::end)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}
