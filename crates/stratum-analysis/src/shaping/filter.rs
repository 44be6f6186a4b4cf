//! Initial focus: which classified nodes a view starts from.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use stratum_core::config::ViewConfig;
use stratum_core::types::{CodeGraph, ComponentPassport, LayerType};

/// What the caller wants to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    /// Physical focus. `None` means the whole tree.
    pub focus_dir: Option<PathBuf>,
    /// Context whitelist. Empty means every context.
    pub contexts: BTreeSet<String>,
    /// Layer whitelist. Empty means every layer.
    pub layers: BTreeSet<LayerType>,
    pub include_assets: bool,
    /// Expansion hops along import edges.
    pub depth: u32,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self {
            focus_dir: None,
            contexts: BTreeSet::new(),
            layers: BTreeSet::new(),
            include_assets: true,
            depth: 0,
        }
    }
}

impl ViewRequest {
    /// Request seeded from the `[view]` config section. Unknown layer names are
    /// skipped; the config loader rejects them earlier.
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            focus_dir: None,
            contexts: config.contexts.iter().cloned().collect(),
            layers: config
                .layers
                .iter()
                .filter_map(|l| LayerType::from_name(l))
                .collect(),
            include_assets: config.effective_include_assets(),
            depth: config.effective_depth(),
        }
    }

    pub fn with_focus(mut self, dir: impl Into<PathBuf>) -> Self {
        self.focus_dir = Some(dir.into());
        self
    }

    pub fn with_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts = contexts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_layers(mut self, layers: impl IntoIterator<Item = LayerType>) -> Self {
        self.layers = layers.into_iter().collect();
        self
    }

    pub fn with_assets(mut self, include: bool) -> Self {
        self.include_assets = include;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Candidate gate: under the focus, or in a whitelisted context.
    fn is_candidate(&self, file_path: &Path, passport: &ComponentPassport) -> bool {
        match self.focus_dir {
            None => true,
            Some(ref focus) => {
                file_path.starts_with(focus) || self.contexts.contains(&passport.context_name)
            }
        }
    }

    /// Logical gate: assets, layer whitelist, context whitelist.
    fn admits(&self, passport: &ComponentPassport) -> bool {
        if !self.include_assets && passport.component_type.is_asset() {
            return false;
        }
        if !self.layers.is_empty() && !self.layers.contains(&passport.layer) {
            return false;
        }
        if !self.contexts.is_empty() && !self.contexts.contains(&passport.context_name) {
            return false;
        }
        true
    }
}

/// Ids of the nodes that pass both gates. Nodes without a passport never do.
pub fn determine_initial_focus(graph: &CodeGraph, request: &ViewRequest) -> BTreeSet<String> {
    let visible: BTreeSet<String> = graph
        .nodes()
        .filter_map(|node| {
            let passport = node.passport()?;
            (request.is_candidate(node.file_path(), passport) && request.admits(passport))
                .then(|| node.id().to_string())
        })
        .collect();

    tracing::debug!(
        total = graph.len(),
        visible = visible.len(),
        focus = ?request.focus_dir,
        "initial focus determined"
    );
    visible
}
