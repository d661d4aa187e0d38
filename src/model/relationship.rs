//! Relationship (edge) in the property graph.

use serde::{Deserialize, Serialize};
use super::NodeId;

/// Opaque relationship identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelId(pub u64);

impl std::fmt::Display for RelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Traversal direction.
///
/// Acquaintance is symmetric, so searches default to `Both`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Outgoing,
    Incoming,
    #[default]
    Both,
}

/// A stored relationship. Direction is only meaningful for
/// `Outgoing`/`Incoming` traversal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelId,
    pub src: NodeId,
    pub dst: NodeId,
    pub rel_type: String,
}

impl Relationship {
    pub fn new(id: RelId, src: NodeId, dst: NodeId, rel_type: impl Into<String>) -> Self {
        Self { id, src, dst, rel_type: rel_type.into() }
    }

    /// The "other" end of the relationship from the given node.
    pub fn other_node(&self, from: NodeId) -> Option<NodeId> {
        if from == self.src { Some(self.dst) }
        else if from == self.dst { Some(self.src) }
        else { None }
    }

    /// Whether this relationship is traversable from `from` in `dir`.
    pub fn leaves(&self, from: NodeId, dir: Direction) -> bool {
        match dir {
            Direction::Outgoing => self.src == from,
            Direction::Incoming => self.dst == from,
            Direction::Both => self.src == from || self.dst == from,
        }
    }
}
