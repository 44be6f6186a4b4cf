//! Intermediate values passed between classification stages.

use regex::Regex;
use serde::{Deserialize, Serialize};
use stratum_core::types::{ComponentType, DirectionType, LayerType, ScopeType};

/// One compiled pattern, ready to be tried against a token.
#[derive(Debug, Clone)]
pub struct RuleCandidate {
    pub component_type: ComponentType,
    /// Anchored, case-insensitive form of `pattern_source`.
    pub pattern: Regex,
    pub pattern_source: String,
    pub priority_weight: u32,
    pub origin_layer: LayerType,
    pub direction: DirectionType,
}

impl RuleCandidate {
    /// Whole-token match.
    pub fn matches(&self, token: &str) -> bool {
        self.pattern.is_match(token)
    }
}

/// Stage 0 output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDiscovery {
    pub scope: ScopeType,
    pub context_name: String,
    pub macro_zone: Option<String>,
    /// Directory segments below the context boundary.
    pub remaining: Vec<String>,
    pub stem: String,
    pub layer_seed: LayerType,
}

/// Stage 1 output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub layer: LayerType,
    pub direction: DirectionType,
    pub searchable_tokens: Vec<String>,
}

/// Counters from classifying one graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationStats {
    /// Nodes that received a passport in this pass.
    pub classified: usize,
    pub structural: usize,
    pub by_name: usize,
    pub unknown: usize,
}
