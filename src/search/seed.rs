//! Seed initializer: snapshot the source before any traversal.

use hashbrown::HashSet;
use tracing::debug;

use crate::model::{NodeId, Value};
use crate::storage::GraphAccessor;
use crate::Result;
use super::config::SearchConfig;
use super::mask::MatchMask;

/// The source's attribute values, positionally paired with their names.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSet {
    names: Vec<String>,
    values: Vec<Value>,
}

impl AttributeSet {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn value(&self, index: usize) -> &Value {
        &self.values[index]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names.iter().map(String::as_str).zip(&self.values)
    }
}

/// Everything the explorer needs from the source, computed once.
#[derive(Debug, Clone)]
pub struct Seed {
    pub source: NodeId,
    pub attributes: AttributeSet,
    /// Every attribute index.
    pub mask: MatchMask,
    /// Nodes one hop from the source.
    pub direct: HashSet<NodeId>,
}

impl Seed {
    /// Fetch the source's values and direct neighbors.
    ///
    /// Any accessor failure here is returned as-is; a search without a
    /// complete snapshot cannot run.
    pub async fn init<A: GraphAccessor + ?Sized>(
        accessor: &A,
        config: &SearchConfig,
        source: NodeId,
        names: Vec<String>,
    ) -> Result<Self> {
        let values = accessor.get_attributes(source, &names).await?;
        let attributes = AttributeSet { names, values };

        let direct: HashSet<NodeId> = accessor
            .get_related(source, &config.rel_type, config.direction)
            .await?
            .into_iter()
            .collect();

        debug!(
            %source,
            attributes = attributes.len(),
            direct_neighbors = direct.len(),
            "seeded search"
        );

        Ok(Self {
            source,
            mask: MatchMask::full(attributes.len()),
            attributes,
            direct,
        })
    }
}
