//! Path explorer: depth-bounded expansion with attribute pruning.
//!
//! Runs on an explicit LIFO work-list instead of recursion. Children of a
//! frame are pushed in reverse accessor order, and a frame's path is recorded
//! when it is popped, so recording order is the depth-first pre-order a
//! recursive walk would produce.

use hashbrown::HashSet;
use smallvec::SmallVec;
use tracing::{info, trace, warn};

use crate::model::{NodeId, Path};
use crate::storage::GraphAccessor;
use crate::{Error, Result};
use super::config::{MissingAttributePolicy, RelationErrorPolicy, SearchConfig};
use super::mask::MatchMask;
use super::result::{ResultSet, SearchStats, SearchWarning};
use super::seed::Seed;

/// One pending expansion.
struct Frame {
    path: Path,
    /// Nodes on `path`, for constant-time loop checks.
    members: HashSet<NodeId>,
    mask: MatchMask,
}

impl Frame {
    fn root(seed: &Seed) -> Self {
        let mut members = HashSet::new();
        members.insert(seed.source);
        Self {
            path: Path::single(seed.source),
            members,
            mask: seed.mask.clone(),
        }
    }

    fn child(&self, node: NodeId, mask: MatchMask) -> Self {
        let mut members = self.members.clone();
        members.insert(node);
        Self { path: self.path.extended(node), members, mask }
    }
}

/// Side products of an exploration. The paths themselves go to the
/// caller's [`ResultSet`].
#[derive(Debug, Default)]
pub struct ExploreReport {
    pub stats: SearchStats,
    pub warnings: Vec<SearchWarning>,
    pub truncated: bool,
}

/// Grow every qualifying path from `seed.source`, up to `max_depth` hops.
///
/// A path is recorded once it has at least two hops. A path is expanded
/// while it has fewer than `max_depth` hops. Past the first hop, direct
/// neighbors of the source are never entered.
pub async fn explore<A: GraphAccessor + ?Sized>(
    accessor: &A,
    config: &SearchConfig,
    seed: &Seed,
    max_depth: usize,
    results: &mut ResultSet,
) -> Result<ExploreReport> {
    let mut report = ExploreReport::default();
    let mut stack = vec![Frame::root(seed)];

    while let Some(frame) = stack.pop() {
        let hops = frame.path.hops();

        if hops >= 2 {
            if !results.push(frame.path.clone()) {
                info!(limit = ?config.max_results, "result limit reached, stopping search");
                report.truncated = true;
                break;
            }
            report.stats.paths_recorded += 1;
        }

        if hops >= max_depth {
            continue;
        }
        report.stats.frames_expanded += 1;

        let prev = frame.path.end();
        let related = match accessor.get_related(prev, &config.rel_type, config.direction).await {
            Ok(related) => related,
            Err(err) => match config.on_relation_error {
                RelationErrorPolicy::Abort => return Err(err),
                RelationErrorPolicy::SkipBranch => {
                    warn!(node = %prev, error = %err, "cannot enumerate relations, skipping branch");
                    report.warnings.push(SearchWarning { node: prev, message: err.to_string() });
                    continue;
                }
            },
        };

        let mut children = Vec::new();
        for next in related {
            report.stats.candidates_examined += 1;

            if hops >= 1 && seed.direct.contains(&next) {
                trace!(node = %next, "direct neighbor past first hop");
                report.stats.skipped_direct_neighbor += 1;
                continue;
            }
            if frame.members.contains(&next) {
                trace!(node = %next, "already on path");
                report.stats.skipped_cycle += 1;
                continue;
            }

            let mask = narrow(accessor, config, seed, &frame.mask, next).await?;
            if mask.is_empty() {
                trace!(node = %next, "no shared attributes left");
                report.stats.pruned_no_match += 1;
                continue;
            }
            children.push(frame.child(next, mask));
        }
        stack.extend(children.into_iter().rev());
    }

    Ok(report)
}

/// Indices of `mask` whose value on `node` equals the source's snapshot.
async fn narrow<A: GraphAccessor + ?Sized>(
    accessor: &A,
    config: &SearchConfig,
    seed: &Seed,
    mask: &MatchMask,
    node: NodeId,
) -> Result<MatchMask> {
    let mut kept: SmallVec<[usize; 8]> = SmallVec::new();

    for index in mask.iter() {
        let name = seed.attributes.name(index);
        match accessor.get_attribute(node, name).await {
            Ok(value) => {
                if value.same_as(seed.attributes.value(index)) {
                    kept.push(index);
                }
            }
            Err(Error::AttributeNotFound { .. })
                if config.missing_attribute == MissingAttributePolicy::NoMatch =>
            {
                trace!(%node, attribute = name, "attribute missing, treated as no match");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(mask.retain(|i| kept.contains(&i)))
}
