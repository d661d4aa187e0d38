//! Export search results.
//!
//! ```text
//! SearchOutcome → export_paths_cypher() → one MATCH per path
//!   → paste into a Cypher shell to inspect the suggested connections
//! SearchOutcome → export_outcome_json() → paths, warnings and stats
//! ```

use std::io::Write;
use crate::model::Path;
use crate::search::SearchOutcome;
use crate::Result;

/// Write each path as a Cypher `MATCH ... RETURN p;` statement.
///
/// Nodes are addressed by an `_id` property holding their `NodeId`, the
/// same key a Cypher dump of the graph would carry.
pub fn export_paths_cypher(
    paths: &[Path],
    rel_type: &str,
    writer: &mut dyn Write,
) -> Result<()> {
    writeln!(writer, "// acquaint suggestions")?;
    writeln!(writer, "// Relationship: {rel_type}")?;
    writeln!(writer, "// Paths: {}", paths.len())?;
    writeln!(writer)?;

    for path in paths {
        writeln!(writer, "{}", path_pattern(path, rel_type))?;
    }
    Ok(())
}

/// Serialize the full outcome as pretty-printed JSON.
pub fn export_outcome_json(outcome: &SearchOutcome, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, outcome)?;
    writeln!(writer)?;
    Ok(())
}

fn path_pattern(path: &Path, rel_type: &str) -> String {
    let hops: Vec<String> = path
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, id)| format!("(n{i} {{_id: {id}}})"))
        .collect();
    let rel = format!("-[:{rel_type}]-");
    format!("MATCH p = {} RETURN p;", hops.join(rel.as_str()))
}
