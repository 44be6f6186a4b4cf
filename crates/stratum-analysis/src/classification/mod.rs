//! Classification engine: turns a module's location into a component passport.
//!
//! - Stage 0: context discovery (scope, context, macro zone, layer seed)
//! - Stage 1: coordinates (layer, direction, searchable tokens)
//! - Stage 2: rule prioritization (precomputed pools)
//! - Stage 3: structural match on folder tokens
//! - Stage 4: name match on the filename stem

pub mod engine;
pub mod markers;
pub mod registry;
pub mod rules;
pub mod stages;
pub mod types;

pub use engine::ClassificationEngine;
pub use registry::RuleRegistry;
pub use rules::RuleSpec;
pub use types::{ClassificationStats, ContextDiscovery, Coordinates, RuleCandidate};
