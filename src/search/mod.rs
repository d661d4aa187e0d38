//! "You might know" search.
//!
//! Seed once, then explore:
//!
//! ```text
//! Seed::init      source attributes + direct neighbors
//!   → explore     bounded DFS, mask narrows at every hop
//!     → ResultSet paths with ≥ 2 hops and a non-empty mask
//! ```

pub mod config;
pub mod seed;
pub mod mask;
pub mod explorer;
pub mod result;

use std::time::Instant;
use tracing::debug;

use crate::model::NodeId;
use crate::storage::GraphAccessor;
use crate::Result;

pub use config::{SearchConfig, MissingAttributePolicy, RelationErrorPolicy, DEFAULT_REL_TYPE};
pub use seed::{Seed, AttributeSet};
pub use mask::MatchMask;
pub use explorer::{explore, ExploreReport};
pub use result::{ResultSet, SearchOutcome, SearchStats, SearchWarning};

/// Find paths of up to `max_depth` hops from `source` whose endpoint shares
/// at least one of `attribute_names` with the source, every node along the
/// way sharing it too. Direct neighbors of the source are never results.
#[tracing::instrument(level = "debug", skip_all, fields(source = %source, max_depth = max_depth))]
pub async fn search<A, I, S>(
    accessor: &A,
    config: &SearchConfig,
    source: NodeId,
    attribute_names: I,
    max_depth: usize,
) -> Result<SearchOutcome>
where
    A: GraphAccessor + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let started = Instant::now();
    config.validate(max_depth)?;

    let names: Vec<String> = attribute_names.into_iter().map(Into::into).collect();
    let seed = Seed::init(accessor, config, source, names).await?;

    let mut results = ResultSet::with_limit(config.max_results);
    let mut report = explore(accessor, config, &seed, max_depth, &mut results).await?;
    report.stats.elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    debug!(
        paths = results.len(),
        warnings = report.warnings.len(),
        stats = ?report.stats,
        "search finished"
    );

    Ok(SearchOutcome {
        paths: results.into_paths(),
        warnings: report.warnings,
        stats: report.stats,
        truncated: report.truncated,
    })
}
