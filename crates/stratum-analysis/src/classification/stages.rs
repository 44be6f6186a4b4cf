//! The classification stages, each a pure function over the registry.

use stratum_core::types::{DirectionType, LayerType, ScopeType};

use super::registry::RuleRegistry;
use super::types::{ContextDiscovery, Coordinates, RuleCandidate};

const ROOT_CONTEXT: &str = "root";
const SHARED_CONTEXT: &str = "shared";

/// Stage 0: scope, context, macro zone, and a first layer guess.
///
/// `dirs` are the directory segments below the source root; `stem` is the
/// filename without extension.
pub fn discover_context(registry: &RuleRegistry, dirs: &[String], stem: &str) -> ContextDiscovery {
    let first = dirs.first().map(String::as_str).unwrap_or(stem);
    let below_first = dirs.get(1..).unwrap_or(&[]).to_vec();

    let (scope, context_name, macro_zone, remaining) = match registry.scope_of(first) {
        Some(ScopeType::Root) => (ScopeType::Root, ROOT_CONTEXT.to_string(), None, below_first),
        Some(ScopeType::Shared) => (
            ScopeType::Shared,
            SHARED_CONTEXT.to_string(),
            None,
            below_first,
        ),
        _ => {
            let boundary = dirs.iter().position(|d| registry.layer_of(d).is_some());
            match boundary {
                // Everything above the context folder is the macro zone.
                Some(i) if i >= 1 => {
                    let zone = dirs[..i - 1].join(".");
                    (
                        ScopeType::Context,
                        dirs[i - 1].clone(),
                        (!zone.is_empty()).then_some(zone),
                        dirs[i..].to_vec(),
                    )
                }
                // A layer folder directly under the root names its own context.
                Some(_) => (ScopeType::Context, dirs[0].clone(), None, dirs.to_vec()),
                None => (ScopeType::Context, first.to_string(), None, below_first),
            }
        }
    };

    let layer_seed = remaining
        .iter()
        .find_map(|d| registry.layer_of(d))
        .or_else(|| registry.infer_layer_from_stem(stem))
        .unwrap_or(LayerType::Undefined);

    ContextDiscovery {
        scope,
        context_name,
        macro_zone,
        remaining,
        stem: stem.to_string(),
        layer_seed,
    }
}

/// Stage 1: final layer, direction, and the tokens left for rule matching.
pub fn define_coordinates(registry: &RuleRegistry, discovery: &ContextDiscovery) -> Coordinates {
    let layer = match discovery.scope {
        ScopeType::Root => LayerType::Composition,
        _ => discovery.layer_seed,
    };

    let direction = if layer.is_directional() || layer == LayerType::Undefined {
        discovery
            .remaining
            .iter()
            .find_map(|d| registry.direction_of(d))
            .unwrap_or(DirectionType::Undefined)
    } else {
        DirectionType::None
    };

    let searchable_tokens = discovery
        .remaining
        .iter()
        .filter(|d| !registry.is_marker(d))
        .cloned()
        .collect();

    Coordinates {
        layer,
        direction,
        searchable_tokens,
    }
}

/// Stage 2: the sorted candidate pool for these coordinates.
pub fn prioritize<'r>(registry: &'r RuleRegistry, coordinates: &Coordinates) -> &'r [RuleCandidate] {
    registry.candidates(coordinates.layer, coordinates.direction)
}

/// Stage 3: rule-major scan; the first rule matching any folder token wins.
pub fn match_structural<'p>(pool: &'p [RuleCandidate], tokens: &[String]) -> Option<&'p RuleCandidate> {
    pool.iter()
        .find(|rule| tokens.iter().any(|token| rule.matches(token)))
}

/// Stage 4: the same scan against the filename stem alone.
pub fn match_name<'p>(pool: &'p [RuleCandidate], stem: &str) -> Option<&'p RuleCandidate> {
    pool.iter().find(|rule| rule.matches(stem))
}
