//! Classification engine: file path in, component passport out.

use std::path::{Component, Path, PathBuf};

use stratum_core::errors::GraphError;
use stratum_core::types::{CodeGraph, ComponentPassport, ComponentType, MatchMethod};

use super::registry::RuleRegistry;
use super::stages::{define_coordinates, discover_context, match_name, match_structural, prioritize};
use super::types::ClassificationStats;

/// Stamps passports on graph nodes. Paths outside `source_root` are never
/// classified.
pub struct ClassificationEngine<'r> {
    source_root: PathBuf,
    registry: &'r RuleRegistry,
}

impl ClassificationEngine<'static> {
    /// Engine backed by the built-in rules.
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self::with_registry(source_root, RuleRegistry::builtin())
    }
}

impl<'r> ClassificationEngine<'r> {
    pub fn with_registry(source_root: impl Into<PathBuf>, registry: &'r RuleRegistry) -> Self {
        Self {
            source_root: source_root.into(),
            registry,
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Run stages 0 through 4 for one file.
    pub fn classify_path(&self, file_path: &Path) -> ComponentPassport {
        let Some((dirs, stem)) = self.split_relative(file_path) else {
            tracing::debug!(path = %file_path.display(), "path outside source root");
            return ComponentPassport::unresolved();
        };

        let discovery = discover_context(self.registry, &dirs, &stem);
        let coordinates = define_coordinates(self.registry, &discovery);
        let pool = prioritize(self.registry, &coordinates);

        let (component_type, match_method, rule_layer) =
            if let Some(rule) = match_structural(pool, &coordinates.searchable_tokens) {
                (rule.component_type, MatchMethod::Structural, Some(rule.origin_layer))
            } else if let Some(rule) = match_name(pool, &discovery.stem) {
                (rule.component_type, MatchMethod::Name, Some(rule.origin_layer))
            } else {
                (ComponentType::Unknown, MatchMethod::Unknown, None)
            };

        ComponentPassport {
            scope: discovery.scope,
            context_name: discovery.context_name,
            macro_zone: discovery.macro_zone,
            layer: coordinates.layer,
            direction: coordinates.direction,
            component_type,
            match_method,
            rule_layer,
        }
    }

    /// Attach a passport to every node that lacks one.
    pub fn classify_graph(&self, graph: &mut CodeGraph) -> Result<ClassificationStats, GraphError> {
        let mut stats = ClassificationStats::default();

        for node in graph.nodes_mut() {
            if node.passport().is_some() {
                continue;
            }
            let passport = self.classify_path(node.file_path());
            match passport.match_method {
                MatchMethod::Structural => stats.structural += 1,
                MatchMethod::Name => stats.by_name += 1,
                MatchMethod::Unknown => stats.unknown += 1,
            }
            node.attach_passport(passport)?;
            stats.classified += 1;
        }

        tracing::info!(
            classified = stats.classified,
            structural = stats.structural,
            by_name = stats.by_name,
            unknown = stats.unknown,
            coverage = graph.coverage_percent(),
            "classification complete"
        );
        Ok(stats)
    }

    /// Directory segments and stem below the root. `None` when the path
    /// escapes the root.
    fn split_relative(&self, file_path: &Path) -> Option<(Vec<String>, String)> {
        let relative = file_path.strip_prefix(&self.source_root).ok()?;
        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => return None,
            }
        }

        let file_name = segments.pop()?;
        let stem = Path::new(&file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(file_name);
        Some((segments, stem))
    }
}
