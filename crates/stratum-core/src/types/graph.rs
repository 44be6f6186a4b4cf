//! The module dependency graph, progressively annotated in place by each
//! pipeline stage.
//!
//! The graph owns every node by value, keyed by logical path. Stages mutate
//! nodes through the lifecycle methods on [`CodeNode`], which enforce that
//! status only moves forward and that finalization requires a passport.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::passport::ComponentPassport;
use crate::errors::GraphError;

/// Lifecycle of a node. Ordered: a node never moves to a lower status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Discovered,
    Linked,
    Classified,
    Finalized,
}

impl NodeStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::Linked => "linked",
            Self::Classified => "classified",
            Self::Finalized => "finalized",
        }
    }
}

impl std::fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One module in the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeNode {
    id: String,
    file_path: PathBuf,
    imports: BTreeSet<String>,
    status: NodeStatus,
    passport: Option<ComponentPassport>,
}

impl CodeNode {
    /// A freshly discovered node with no edges.
    pub fn new(id: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            file_path: file_path.into(),
            imports: BTreeSet::new(),
            status: NodeStatus::Discovered,
            passport: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Ids of the modules this node imports.
    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn passport(&self) -> Option<&ComponentPassport> {
        self.passport.as_ref()
    }

    /// Record an outgoing edge. Self-edges are dropped.
    pub fn add_import(&mut self, target: impl Into<String>) -> bool {
        let target = target.into();
        if target == self.id {
            return false;
        }
        self.imports.insert(target)
    }

    /// Move the node forward to `next`. Staying at the current status is a no-op.
    pub fn advance(&mut self, next: NodeStatus) -> Result<(), GraphError> {
        if next < self.status {
            return Err(GraphError::StatusRegression {
                id: self.id.clone(),
                from: self.status,
                to: next,
            });
        }
        if next == NodeStatus::Finalized && self.passport.is_none() {
            return Err(GraphError::MissingPassport {
                id: self.id.clone(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Attach the classification result and mark the node classified.
    /// A passport, once attached, is never replaced.
    pub fn attach_passport(&mut self, passport: ComponentPassport) -> Result<(), GraphError> {
        if self.passport.is_some() {
            return Ok(());
        }
        self.advance(NodeStatus::Classified)?;
        self.passport = Some(passport);
        Ok(())
    }
}

/// Mapping of logical path to node. Metrics are computed on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeGraph {
    nodes: BTreeMap<String, CodeNode>,
}

impl CodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node with the same id.
    pub fn insert(&mut self, node: CodeNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn get(&self, id: &str) -> Option<&CodeNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut CodeNode> {
        self.nodes.get_mut(id)
    }

    /// Advance the node `id` to `next`.
    pub fn advance(&mut self, id: &str, next: NodeStatus) -> Result<(), GraphError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::UnknownNode { id: id.to_string() })?
            .advance(next)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &CodeNode> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut CodeNode> {
        self.nodes.values_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Every `(source, target)` edge, in id order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .values()
            .flat_map(|n| n.imports.iter().map(move |t| (n.id.as_str(), t.as_str())))
    }

    pub fn total_files(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes whose passport names a known component type.
    pub fn classified_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|n| n.passport.as_ref().is_some_and(|p| p.is_resolved()))
            .count()
    }

    /// Share of nodes with a known component type, in percent. 0 for an empty graph.
    pub fn coverage_percent(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        self.classified_count() as f64 / self.nodes.len() as f64 * 100.0
    }

    pub fn nodes_with_status(&self, status: NodeStatus) -> impl Iterator<Item = &CodeNode> {
        self.nodes.values().filter(move |n| n.status == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::passport::{ComponentType, DomainType, MatchMethod};

    fn passport(component_type: ComponentType) -> ComponentPassport {
        ComponentPassport {
            component_type,
            match_method: MatchMethod::Structural,
            ..ComponentPassport::unresolved()
        }
    }

    #[test]
    fn status_never_regresses() {
        let mut node = CodeNode::new("billing.domain.order", "src/billing/domain/order.py");
        node.advance(NodeStatus::Linked).unwrap();
        let err = node.advance(NodeStatus::Discovered).unwrap_err();
        assert!(matches!(err, GraphError::StatusRegression { .. }));
        assert_eq!(node.status(), NodeStatus::Linked);
    }

    #[test]
    fn finalize_requires_passport() {
        let mut node = CodeNode::new("a", "src/a.py");
        node.advance(NodeStatus::Linked).unwrap();
        assert!(matches!(
            node.advance(NodeStatus::Finalized),
            Err(GraphError::MissingPassport { .. })
        ));

        node.attach_passport(passport(ComponentType::Unknown)).unwrap();
        assert_eq!(node.status(), NodeStatus::Classified);
        node.advance(NodeStatus::Finalized).unwrap();
        assert_eq!(node.status(), NodeStatus::Finalized);
    }

    #[test]
    fn passport_is_not_replaced() {
        let mut node = CodeNode::new("a", "src/a.py");
        node.attach_passport(passport(ComponentType::Domain(DomainType::Entity)))
            .unwrap();
        node.attach_passport(passport(ComponentType::Unknown)).unwrap();
        assert_eq!(
            node.passport().unwrap().component_type,
            ComponentType::Domain(DomainType::Entity)
        );
    }

    #[test]
    fn self_edges_are_dropped() {
        let mut node = CodeNode::new("a", "src/a.py");
        assert!(!node.add_import("a"));
        assert!(node.add_import("b"));
        assert_eq!(node.imports().len(), 1);
    }

    #[test]
    fn coverage_counts_known_types_only() {
        let mut graph = CodeGraph::new();
        let mut a = CodeNode::new("a", "src/a.py");
        a.attach_passport(passport(ComponentType::Domain(DomainType::Entity)))
            .unwrap();
        let mut b = CodeNode::new("b", "src/b.py");
        b.attach_passport(passport(ComponentType::Unknown)).unwrap();
        graph.insert(a);
        graph.insert(b);

        assert_eq!(graph.total_files(), 2);
        assert_eq!(graph.classified_count(), 1);
        assert!((graph.coverage_percent() - 50.0).abs() < f64::EPSILON);
        assert_eq!(CodeGraph::new().coverage_percent(), 0.0);
    }
}
