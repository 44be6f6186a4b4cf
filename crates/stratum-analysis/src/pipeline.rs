//! Orchestrating use case: read → build → classify → filter → expand → prune.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use stratum_core::config::StratumConfig;
use stratum_core::errors::{PipelineError, PipelineResult};
use stratum_core::types::CodeGraph;

use crate::classification::{ClassificationEngine, ClassificationStats};
use crate::graph::{BuildStats, GraphBuilder};
use crate::scanner::{ScanStats, SourceReader};
use crate::shaping::{determine_initial_focus, expand, finalize, GraphView, ViewRequest};

/// Everything a run produces.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    /// The whole graph. Visible nodes are finalized, the rest stay classified.
    pub graph: CodeGraph,
    pub visible: BTreeSet<String>,
    pub view: GraphView,
    pub scan: ScanStats,
    pub build: BuildStats,
    pub classification: ClassificationStats,
    pub finalized: usize,
}

pub struct ArchitecturePipeline;

impl ArchitecturePipeline {
    /// Run every stage for the project at `project_root`.
    ///
    /// A relative `focus_dir` in `request` is taken relative to the source root.
    pub fn run(
        project_root: &Path,
        config: &StratumConfig,
        request: &ViewRequest,
    ) -> Result<PipelineResult<PipelineOutput>, PipelineError> {
        let source_root = config.layout.source_root(project_root);
        let root_package = config.layout.root_package_name(project_root);

        let reader = SourceReader::open(&source_root, &config.scan)?;
        let mut builder = GraphBuilder::new(&source_root, root_package)?;

        let mut files = reader.files();
        let built =
            builder.build_with_policy(files.by_ref(), config.scan.effective_on_parse_error())?;
        let scan = files.stats();
        tracing::info!(
            files = scan.files_yielded,
            unreadable = scan.files_unreadable,
            excluded_dirs = scan.dirs_excluded,
            "scan complete"
        );

        let PipelineResult { data, errors } = built;
        let mut graph = data.graph;

        let engine = ClassificationEngine::new(builder.path_resolver().root());
        let classification = engine.classify_graph(&mut graph)?;

        let request = Self::anchor_focus(request, builder.path_resolver().root());
        let initial = determine_initial_focus(&graph, &request);
        let visible = expand(&graph, &initial, request.depth);
        let finalized = finalize(&mut graph, &visible);
        let view = GraphView::from_graph(&graph, &visible);

        Ok(PipelineResult {
            data: PipelineOutput {
                graph,
                visible,
                view,
                scan,
                build: data.stats,
                classification,
                finalized,
            },
            errors,
        })
    }

    fn anchor_focus(request: &ViewRequest, source_root: &Path) -> ViewRequest {
        let mut request = request.clone();
        if let Some(focus) = request.focus_dir.take() {
            let anchored: PathBuf = if focus.is_relative() {
                source_root.join(focus)
            } else {
                focus
            };
            request.focus_dir = Some(anchored);
        }
        request
    }
}
