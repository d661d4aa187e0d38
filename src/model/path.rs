//! Path: a loop-free sequence of nodes, starting at the search source.

use serde::Serialize;
use super::NodeId;

/// A path in the graph: source -[rel]- node -[rel]- node ...
///
/// Only node identities are kept; the relation type is fixed per search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn single(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }

    pub fn from_nodes(nodes: Vec<NodeId>) -> Option<Self> {
        if nodes.is_empty() { None } else { Some(Self { nodes }) }
    }

    /// Number of nodes on the path (source included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a path holds at least its source.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of relationship hops.
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Linear scan. The explorer keeps its own member set instead.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// The first `len` nodes, or `None` if `len` is 0 or past the end.
    pub fn prefix(&self, len: usize) -> Option<Path> {
        if len == 0 || len > self.nodes.len() {
            return None;
        }
        Some(Self { nodes: self.nodes[..len].to_vec() })
    }

    /// A copy of this path with `node` appended.
    pub fn extended(&self, node: NodeId) -> Path {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(node);
        Self { nodes }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, id) in self.nodes.iter().enumerate() {
            if i > 0 { write!(f, "-")?; }
            write!(f, "({id})")?;
        }
        Ok(())
    }
}
