//! Graph view configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VIEW_DEPTH;

/// Defaults for the shaped view handed to the visualizer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewConfig {
    /// Expansion hops along import edges. Default: 0.
    pub depth: Option<u32>,
    /// Keep asset-type components in the view. Default: true.
    pub include_assets: Option<bool>,
    /// Bounded-context whitelist.
    pub contexts: Vec<String>,
    /// Layer whitelist, by layer name (e.g. "domain", "app").
    pub layers: Vec<String>,
}

impl ViewConfig {
    pub fn effective_depth(&self) -> u32 {
        self.depth.unwrap_or(DEFAULT_VIEW_DEPTH)
    }

    pub fn effective_include_assets(&self) -> bool {
        self.include_assets.unwrap_or(true)
    }
}
