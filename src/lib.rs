//! # acquaint: "people you may know" over a property graph
//!
//! Given a person, find everyone reachable over a few acquaintance hops who
//! still shares something with them (same city, same school, ...), skipping
//! people they already know directly.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphAccessor` is the contract between search and storage
//! 2. **Clean DTOs**: `NodeId`, `Path`, `Value` cross all boundaries
//! 3. **Read-only core**: the search never mutates graph state
//! 4. **Explicit work-list**: no recursion, bounded by `max_depth`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use acquaint::{Recommender, props};
//!
//! # async fn example() -> acquaint::Result<()> {
//! let rec = Recommender::open_memory();
//! let graph = rec.accessor();
//!
//! let ada = graph.create_node(&["Person"], props([("city", "London")]));
//! let bob = graph.create_node(&["Person"], props([("city", "Paris")]));
//! let cy = graph.create_node(&["Person"], props([("city", "London")]));
//! graph.create_relationship(ada, bob, "KNOWS")?;
//! graph.create_relationship(bob, cy, "KNOWS")?;
//!
//! // bob shares nothing with ada, so the branch through him is pruned.
//! let paths = rec.you_might_know(ada, ["city"], 2).await?;
//! assert!(paths.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Partial results
//!
//! With the default `RelationErrorPolicy::SkipBranch`, a node whose relations
//! cannot be enumerated only drops its own branch. `Recommender::search`
//! returns the surviving paths together with one `SearchWarning` per dropped
//! branch, so check `SearchOutcome::warnings` before trusting a result as
//! complete. `Recommender::you_might_know` returns the paths alone and
//! discards those warnings; use `search`, or configure
//! `RelationErrorPolicy::Abort`, when completeness matters.
//!
//! ## Accessors
//!
//! | Accessor | Description |
//! |----------|-------------|
//! | `MemoryGraph` | In-memory graph for testing/embedding |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod search;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Node, Relationship, Path, Value, PropertyMap, props,
    NodeId, RelId, Direction,
};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use storage::{GraphAccessor, MemoryGraph};

// ============================================================================
// Re-exports: Search
// ============================================================================

pub use search::{
    SearchConfig, SearchOutcome, SearchStats, SearchWarning,
    MissingAttributePolicy, RelationErrorPolicy,
};

// ============================================================================
// Top-level Recommender handle
// ============================================================================

/// The primary entry point. A `Recommender` wraps a graph accessor and a
/// search configuration.
pub struct Recommender<A: GraphAccessor> {
    accessor: A,
    config: SearchConfig,
}

impl<A: GraphAccessor> Recommender<A> {
    /// Create a Recommender with default configuration.
    pub fn with_accessor(accessor: A) -> Self {
        Self { accessor, config: SearchConfig::default() }
    }

    pub fn with_config(accessor: A, config: SearchConfig) -> Self {
        Self { accessor, config }
    }

    /// Run a search and return paths together with warnings and counters.
    pub async fn search<I, S>(
        &self,
        source: NodeId,
        attribute_names: I,
        max_depth: usize,
    ) -> Result<SearchOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        search::search(&self.accessor, &self.config, source, attribute_names, max_depth).await
    }

    /// Paths only. Skipped-branch warnings are discarded (see the crate-level
    /// "Partial results" notes); configure `RelationErrorPolicy::Abort` to
    /// have them fail the call instead.
    pub async fn you_might_know<I, S>(
        &self,
        source: NodeId,
        attribute_names: I,
        max_depth: usize,
    ) -> Result<Vec<Path>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(self.search(source, attribute_names, max_depth).await?.paths)
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Access the underlying accessor (for loading fixtures, etc.).
    pub fn accessor(&self) -> &A {
        &self.accessor
    }
}

/// In-memory graph for testing and embedding.
impl Recommender<MemoryGraph> {
    pub fn open_memory() -> Self {
        Self::with_accessor(MemoryGraph::new())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Attribute '{name}' not found on node {node}")]
    AttributeNotFound { node: NodeId, name: String },

    #[error("Graph access error at node {node}: {message}")]
    GraphAccess { node: NodeId, message: String },

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
