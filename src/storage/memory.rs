//! In-memory graph accessor.
//!
//! This is the reference implementation of `GraphAccessor`.
//! It uses simple HashMaps protected by RwLock.
//!
//! ## Limitations
//!
//! - **No persistence**: the graph lives as long as the last handle.
//! - **Builder-style writes only**: `create_node`, `create_relationship` and
//!   `set_property` exist to load fixtures. Per-collection locks mean
//!   multi-step writes are NOT atomic; load first, then search.
//!
//! Use this accessor for:
//! - Testing the search against hand-built graphs
//! - Embedding in applications that keep a small social graph in memory

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use parking_lot::RwLock;
use async_trait::async_trait;

use crate::model::*;
use crate::{Error, Result};
use super::GraphAccessor;

// ============================================================================
// MemoryGraph
// ============================================================================

/// In-memory property graph. Cloning shares the same underlying graph.
#[derive(Clone)]
pub struct MemoryGraph {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    nodes: RwLock<HashMap<NodeId, Node>>,
    relationships: RwLock<HashMap<RelId, Relationship>>,
    /// node_id → list of relationship IDs, in creation order
    adjacency: RwLock<HashMap<NodeId, Vec<RelId>>>,
    next_node_id: AtomicU64,
    next_rel_id: AtomicU64,
}

impl Default for MemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                nodes: RwLock::new(HashMap::new()),
                relationships: RwLock::new(HashMap::new()),
                adjacency: RwLock::new(HashMap::new()),
                next_node_id: AtomicU64::new(1),
                next_rel_id: AtomicU64::new(1),
            }),
        }
    }

    // ========================================================================
    // Fixture loading
    // ========================================================================

    /// Create a node with the given labels and properties. IDs start at 1.
    pub fn create_node(&self, labels: &[&str], props: PropertyMap) -> NodeId {
        let id = NodeId(self.inner.next_node_id.fetch_add(1, Ordering::Relaxed));
        let node = Node {
            id,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            properties: props,
        };

        self.inner.nodes.write().insert(id, node);
        self.inner.adjacency.write().insert(id, Vec::new());
        id
    }

    /// Create a relationship between two existing nodes.
    pub fn create_relationship(&self, src: NodeId, dst: NodeId, rel_type: &str) -> Result<RelId> {
        {
            let nodes = self.inner.nodes.read();
            if !nodes.contains_key(&src) {
                return Err(Error::NodeNotFound(src));
            }
            if !nodes.contains_key(&dst) {
                return Err(Error::NodeNotFound(dst));
            }
        }

        let id = RelId(self.inner.next_rel_id.fetch_add(1, Ordering::Relaxed));
        self.inner.relationships.write().insert(id, Relationship::new(id, src, dst, rel_type));

        // Update adjacency for both endpoints
        let mut adj = self.inner.adjacency.write();
        adj.entry(src).or_default().push(id);
        if src != dst {
            adj.entry(dst).or_default().push(id);
        }

        Ok(id)
    }

    /// Set a property on a node (upsert).
    pub fn set_property(&self, id: NodeId, key: &str, val: impl Into<Value>) -> Result<()> {
        let mut nodes = self.inner.nodes.write();
        let node = nodes.get_mut(&id).ok_or(Error::NodeNotFound(id))?;
        node.properties.insert(key.to_string(), val.into());
        Ok(())
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn get_node(&self, id: NodeId) -> Option<Node> {
        self.inner.nodes.read().get(&id).cloned()
    }

    pub fn node_count(&self) -> usize {
        self.inner.nodes.read().len()
    }

    pub fn relationship_count(&self) -> usize {
        self.inner.relationships.read().len()
    }
}

// ============================================================================
// GraphAccessor impl
// ============================================================================

#[async_trait]
impl GraphAccessor for MemoryGraph {
    async fn get_attribute(&self, node: NodeId, name: &str) -> Result<Value> {
        let nodes = self.inner.nodes.read();
        let found = nodes.get(&node).ok_or(Error::NodeNotFound(node))?;
        found.get(name).cloned().ok_or_else(|| Error::AttributeNotFound {
            node,
            name: name.to_string(),
        })
    }

    async fn get_related(
        &self,
        node: NodeId,
        rel_type: &str,
        dir: Direction,
    ) -> Result<Vec<NodeId>> {
        let adj = self.inner.adjacency.read();
        let rels = self.inner.relationships.read();

        let rel_ids = adj.get(&node).ok_or(Error::NodeNotFound(node))?;
        let mut result = Vec::with_capacity(rel_ids.len());

        for rid in rel_ids {
            if let Some(rel) = rels.get(rid) {
                if rel.rel_type != rel_type || !rel.leaves(node, dir) {
                    continue;
                }
                if let Some(other) = rel.other_node(node) {
                    result.push(other);
                }
            }
        }

        Ok(result)
    }
}

// ============================================================================
// Tests
// ============================================================================
