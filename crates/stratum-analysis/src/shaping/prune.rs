//! Finalization of the visible set.

use std::collections::BTreeSet;

use stratum_core::errors::GraphError;
use stratum_core::types::{CodeGraph, NodeStatus};

/// Move every visible node to `Finalized`. Nodes outside the set keep their
/// status as hidden background context. Returns how many nodes were finalized.
///
/// Visible ids with no node are skipped, as are nodes without a passport.
pub fn finalize(graph: &mut CodeGraph, visible: &BTreeSet<String>) -> usize {
    let mut finalized = 0;
    for id in visible {
        match graph.advance(id, NodeStatus::Finalized) {
            Ok(()) => finalized += 1,
            Err(GraphError::UnknownNode { .. }) => {}
            Err(e @ GraphError::MissingPassport { .. }) => {
                tracing::warn!(error = %e, "visible node left unfinalized");
            }
            Err(e) => {
                tracing::warn!(error = %e, "unexpected lifecycle error during finalize");
            }
        }
    }
    tracing::debug!(finalized, visible = visible.len(), "graph pruned");
    finalized
}
