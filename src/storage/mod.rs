//! # Graph Accessor Trait
//!
//! This is THE contract between the search core and whatever holds the graph.
//! The core only ever reads attributes and enumerates related nodes; it never
//! owns, stores, or mutates graph data.
//!
//! ## Implementations
//!
//! | Accessor | Module | Description |
//! |----------|--------|-------------|
//! | `MemoryGraph` | `memory` | In-memory for testing/embedding |
//!
//! Remote stores (a Bolt client, a columnar engine) implement the same trait;
//! retry policy, connection pooling and caching live on their side.

pub mod memory;

use async_trait::async_trait;
use crate::model::*;
use crate::Result;

pub use memory::MemoryGraph;

// ============================================================================
// GraphAccessor Trait
// ============================================================================

/// Read-only access to a property graph.
///
/// Any store that implements this trait can back a [`crate::Recommender`].
#[async_trait]
pub trait GraphAccessor: Send + Sync {
    /// Read one attribute of a node.
    ///
    /// Must fail with `Error::AttributeNotFound` when the node has no value
    /// for `name`. A stored `Null` counts as no value.
    async fn get_attribute(&self, node: NodeId, name: &str) -> Result<Value>;

    /// Nodes reachable from `node` over one `rel_type` relationship.
    ///
    /// One entry per relationship: parallel edges yield the same node more
    /// than once, and a self loop yields `node` itself. Order is whatever the
    /// store produces.
    async fn get_related(
        &self,
        node: NodeId,
        rel_type: &str,
        dir: Direction,
    ) -> Result<Vec<NodeId>>;

    /// Read several attributes, in order.
    ///
    /// Default: one `get_attribute` call per name. Override for stores that
    /// can fetch a projection in a single round trip.
    async fn get_attributes(&self, node: NodeId, names: &[String]) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(names.len());
        for name in names {
            values.push(self.get_attribute(node, name).await?);
        }
        Ok(values)
    }
}

#[async_trait]
impl<A: GraphAccessor + ?Sized> GraphAccessor for &A {
    async fn get_attribute(&self, node: NodeId, name: &str) -> Result<Value> {
        (**self).get_attribute(node, name).await
    }

    async fn get_related(
        &self,
        node: NodeId,
        rel_type: &str,
        dir: Direction,
    ) -> Result<Vec<NodeId>> {
        (**self).get_related(node, rel_type, dir).await
    }

    async fn get_attributes(&self, node: NodeId, names: &[String]) -> Result<Vec<Value>> {
        (**self).get_attributes(node, names).await
    }
}
