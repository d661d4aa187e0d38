//! Match mask: which attribute indices still agree with the source.

use serde::Serialize;
use smallvec::SmallVec;

/// Ordered set of surviving attribute indices.
///
/// Built only by [`MatchMask::full`] and narrowed by [`MatchMask::retain`],
/// so a child mask is always a subset of its parent's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchMask {
    indices: SmallVec<[usize; 8]>,
}

impl MatchMask {
    /// Every index in `0..len`.
    pub fn full(len: usize) -> Self {
        Self { indices: (0..len).collect() }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Keep only the indices for which `keep` holds, preserving order.
    pub fn retain(&self, mut keep: impl FnMut(usize) -> bool) -> Self {
        Self { indices: self.indices.iter().copied().filter(|&i| keep(i)).collect() }
    }

    pub fn is_subset_of(&self, other: &MatchMask) -> bool {
        self.indices.iter().all(|i| other.contains(*i))
    }
}
