//! Presentation payload for the diagram renderer.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use stratum_core::types::{CodeGraph, ComponentPassport, LayerType, NodeStatus, ScopeType};

/// One visible node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewNode {
    pub id: String,
    pub file_path: PathBuf,
    pub status: NodeStatus,
    pub passport: Option<ComponentPassport>,
}

/// Per-context metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSummary {
    pub name: String,
    pub scope: ScopeType,
    pub macro_zone: Option<String>,
    pub node_count: usize,
    pub layers: BTreeSet<LayerType>,
}

/// Visible subgraph with edges restricted to visible endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<ViewNode>,
    pub edges: Vec<(String, String)>,
    pub contexts: Vec<ContextSummary>,
}

impl GraphView {
    /// Build the view for `visible`. Ids with no node are dropped.
    pub fn from_graph(graph: &CodeGraph, visible: &BTreeSet<String>) -> Self {
        let nodes: Vec<ViewNode> = visible
            .iter()
            .filter_map(|id| graph.get(id))
            .map(|n| ViewNode {
                id: n.id().to_string(),
                file_path: n.file_path().to_path_buf(),
                status: n.status(),
                passport: n.passport().cloned(),
            })
            .collect();

        let edges = graph
            .edges()
            .filter(|(from, to)| visible.contains(*from) && visible.contains(*to))
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();

        let mut contexts: BTreeMap<&str, ContextSummary> = BTreeMap::new();
        for passport in nodes.iter().filter_map(|n| n.passport.as_ref()) {
            let summary = contexts
                .entry(passport.context_name.as_str())
                .or_insert_with(|| ContextSummary {
                    name: passport.context_name.clone(),
                    scope: passport.scope,
                    macro_zone: passport.macro_zone.clone(),
                    node_count: 0,
                    layers: BTreeSet::new(),
                });
            summary.node_count += 1;
            summary.layers.insert(passport.layer);
        }
        let contexts = contexts.into_values().collect();

        Self {
            nodes,
            edges,
            contexts,
        }
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
