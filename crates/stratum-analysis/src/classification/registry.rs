//! Compiled rule registry with precomputed candidate pools.
//!
//! The layer × direction domain is small, so every pool is built once at
//! construction and never changes afterwards.

use std::sync::LazyLock;

use regex::Regex;
use stratum_core::errors::ClassificationError;
use stratum_core::types::{DirectionType, FxHashMap, LayerType, ScopeType};

use super::markers::MarkerSet;
use super::rules::{
    layer_weight, RuleSpec, DIRECTION_MARKERS, LAYER_MARKERS, NAMING_RULES, SCOPE_MARKERS,
    STRUCTURAL_RULES,
};
use super::types::RuleCandidate;

static BUILTIN: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::compile_builtin);

/// Anchor a pattern fragment for whole-token, case-insensitive matching.
pub(crate) fn compile_anchored(source: &str) -> Result<Regex, ClassificationError> {
    Regex::new(&format!("(?i)^(?:{source})$")).map_err(|e| {
        ClassificationError::InvalidRulePattern {
            pattern: source.to_string(),
            message: e.to_string(),
        }
    })
}

/// Read-only rule tables plus the sorted pool for every (layer, direction).
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    scope_markers: MarkerSet<ScopeType>,
    layer_markers: MarkerSet<LayerType>,
    direction_markers: MarkerSet<DirectionType>,
    rule_count: usize,
    /// Naming rules in priority order, for seeding a layer from a filename.
    stem_inference: Vec<RuleCandidate>,
    pools: FxHashMap<(LayerType, DirectionType), Vec<RuleCandidate>>,
}

impl RuleRegistry {
    /// The process-wide registry built from the built-in tables.
    pub fn builtin() -> &'static RuleRegistry {
        &BUILTIN
    }

    /// Compile a registry from caller-supplied rule tables.
    pub fn from_specs(
        structural: &[RuleSpec<'_>],
        naming: &[RuleSpec<'_>],
    ) -> Result<Self, ClassificationError> {
        let structural = compile_specs(structural)?;
        let naming = compile_specs(naming)?;

        let mut stem_inference: Vec<RuleCandidate> = naming
            .iter()
            .filter(|c| c.origin_layer != LayerType::Undefined)
            .cloned()
            .collect();
        sort_by_priority(&mut stem_inference);

        let all: Vec<RuleCandidate> = structural.iter().chain(naming.iter()).cloned().collect();
        let mut pools = FxHashMap::default();
        for layer in LayerType::ALL {
            for direction in DirectionType::ALL {
                pools.insert((layer, direction), build_pool(&all, layer, direction));
            }
        }

        Ok(Self {
            scope_markers: MarkerSet::compile(SCOPE_MARKERS)?,
            layer_markers: MarkerSet::compile(LAYER_MARKERS)?,
            direction_markers: MarkerSet::compile(DIRECTION_MARKERS)?,
            rule_count: all.len(),
            stem_inference,
            pools,
        })
    }

    fn compile_builtin() -> Self {
        match Self::from_specs(STRUCTURAL_RULES, NAMING_RULES) {
            Ok(registry) => {
                tracing::debug!(rules = registry.len(), "built-in rule registry compiled");
                registry
            }
            Err(e) => {
                tracing::error!(error = %e, "built-in rule registry failed to compile");
                Self::default()
            }
        }
    }

    /// Sorted pool for a node at `layer` facing `direction`.
    pub fn candidates(&self, layer: LayerType, direction: DirectionType) -> &[RuleCandidate] {
        self.pools
            .get(&(layer, direction))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of compiled patterns across both rule tables.
    pub fn len(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    pub fn scope_of(&self, token: &str) -> Option<ScopeType> {
        self.scope_markers.lookup(token)
    }

    pub fn layer_of(&self, token: &str) -> Option<LayerType> {
        self.layer_markers.lookup(token)
    }

    pub fn direction_of(&self, token: &str) -> Option<DirectionType> {
        self.direction_markers.lookup(token)
    }

    /// Whether `token` is any scope, layer or direction marker.
    pub fn is_marker(&self, token: &str) -> bool {
        self.scope_markers.is_marker(token)
            || self.layer_markers.is_marker(token)
            || self.direction_markers.is_marker(token)
    }

    /// Layer suggested by the filename stem alone.
    pub fn infer_layer_from_stem(&self, stem: &str) -> Option<LayerType> {
        self.stem_inference
            .iter()
            .find(|c| c.matches(stem))
            .map(|c| c.origin_layer)
    }
}

fn compile_specs(specs: &[RuleSpec<'_>]) -> Result<Vec<RuleCandidate>, ClassificationError> {
    let mut out = Vec::new();
    for spec in specs {
        for source in spec.patterns {
            out.push(RuleCandidate {
                component_type: spec.component_type,
                pattern: compile_anchored(source)?,
                pattern_source: (*source).to_string(),
                priority_weight: layer_weight(spec.layer),
                origin_layer: spec.layer,
                direction: spec.direction,
            });
        }
    }
    Ok(out)
}

/// Rules from the node's layer or the fallback layer, on the node's side.
fn build_pool(all: &[RuleCandidate], layer: LayerType, direction: DirectionType) -> Vec<RuleCandidate> {
    let mut pool: Vec<RuleCandidate> = all
        .iter()
        .filter(|c| c.origin_layer == layer || c.origin_layer == LayerType::Global)
        .filter(|c| direction_admits(direction, c.direction))
        .cloned()
        .collect();
    sort_by_priority(&mut pool);
    pool
}

/// Exact side, the wildcard, or "no direction" when the node's side is unknown.
fn direction_admits(node: DirectionType, rule: DirectionType) -> bool {
    rule == node
        || rule == DirectionType::Any
        || (node == DirectionType::Undefined && rule == DirectionType::None)
}

/// Ascending layer weight, then longer patterns first. Stable.
fn sort_by_priority(candidates: &mut [RuleCandidate]) {
    candidates.sort_by(|a, b| {
        a.priority_weight
            .cmp(&b.priority_weight)
            .then_with(|| b.pattern_source.len().cmp(&a.pattern_source.len()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::types::{ComponentType, DomainType, PortType};

    #[test]
    fn builtin_registry_compiles() {
        let registry = RuleRegistry::builtin();
        assert!(!registry.is_empty());
        assert_eq!(
            registry.len(),
            STRUCTURAL_RULES
                .iter()
                .chain(NAMING_RULES)
                .map(|s| s.patterns.len())
                .sum::<usize>()
        );
    }

    #[test]
    fn pools_are_sorted_and_filtered() {
        let registry = RuleRegistry::builtin();
        let pool = registry.candidates(LayerType::Ports, DirectionType::Driving);
        assert!(!pool.is_empty());
        for pair in pool.windows(2) {
            assert!(pair[0].priority_weight <= pair[1].priority_weight);
            if pair[0].priority_weight == pair[1].priority_weight {
                assert!(pair[0].pattern_source.len() >= pair[1].pattern_source.len());
            }
        }
        for c in pool {
            assert!(matches!(c.origin_layer, LayerType::Ports | LayerType::Global));
            assert!(matches!(c.direction, DirectionType::Driving | DirectionType::Any));
        }
        // The fallback layer always sorts after the node's own layer.
        assert_eq!(pool.first().unwrap().origin_layer, LayerType::Ports);
        assert_eq!(pool.last().unwrap().origin_layer, LayerType::Global);
    }

    #[test]
    fn undefined_direction_admits_undirected_rules() {
        let registry = RuleRegistry::builtin();
        let pool = registry.candidates(LayerType::Adapters, DirectionType::Undefined);
        assert!(pool.iter().all(|c| matches!(
            c.direction,
            DirectionType::Any | DirectionType::None | DirectionType::Undefined
        )));
        assert!(pool.iter().any(|c| c.pattern_source == "mappers?"));
        assert!(pool
            .iter()
            .any(|c| c.pattern_source == "gateways?" && c.direction == DirectionType::None));
        assert!(!pool.iter().any(|c| c.pattern_source == "emitters?"));
    }

    #[test]
    fn known_direction_excludes_undirected_rules() {
        let registry = RuleRegistry::builtin();
        let pool = registry.candidates(LayerType::Ports, DirectionType::Driven);
        assert!(!pool.iter().any(|c| c.direction == DirectionType::None));
        assert!(!pool.iter().any(|c| c.component_type == ComponentType::Port(PortType::Facade)));
    }

    #[test]
    fn stem_inference() {
        let registry = RuleRegistry::builtin();
        assert_eq!(registry.infer_layer_from_stem("facade"), Some(LayerType::Ports));
        assert_eq!(registry.infer_layer_from_stem("Order_Entity"), Some(LayerType::Domain));
        assert_eq!(registry.infer_layer_from_stem("order"), None);
    }

    #[test]
    fn invalid_caller_pattern_is_reported() {
        let specs = [RuleSpec::new(
            ComponentType::Domain(DomainType::Entity),
            LayerType::Domain,
            DirectionType::None,
            &["entit(y"],
        )];
        let err = RuleRegistry::from_specs(&specs, &[]).unwrap_err();
        assert!(matches!(err, ClassificationError::InvalidRulePattern { .. }));
    }
}
