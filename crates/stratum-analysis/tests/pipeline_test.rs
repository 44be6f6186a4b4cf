//! PIP-01 through PIP-06: end-to-end runs over a small project tree.

mod common;

use std::path::Path;

use stratum_analysis::{ArchitecturePipeline, ViewRequest};
use stratum_core::config::{ParseFailurePolicy, StratumConfig};
use stratum_core::errors::{ParseError, PipelineError};
use stratum_core::types::{ComponentType, LayerType, NodeStatus, PortType, ScopeType};

fn run(project: &Path, request: &ViewRequest) -> stratum_analysis::PipelineOutput {
    let result = ArchitecturePipeline::run(project, &StratumConfig::default(), request).unwrap();
    assert!(result.is_clean());
    result.data
}

// PIP-01: focusing on one context shows its nodes and nothing from shared
#[test]
fn test_focus_on_context() {
    let project = common::billing_project();
    let out = run(project.path(), &ViewRequest::default().with_focus("billing"));

    let order = out.graph.get("billing.domain.order").unwrap();
    assert!(order.imports().contains("billing.domain.item"));
    let passport = order.passport().unwrap();
    assert_eq!(passport.layer, LayerType::Domain);
    assert_eq!(passport.context_name, "billing");

    assert!(out.visible.contains("billing.domain.order"));
    assert!(out.visible.contains("billing.ports.driving.facade"));
    assert!(!out.visible.iter().any(|id| id.starts_with("shared.")));
    assert!(!out.visible.iter().any(|id| id.starts_with("composition_root.")));

    for id in &out.visible {
        assert_eq!(out.graph.get(id).unwrap().status(), NodeStatus::Finalized);
    }
    assert_eq!(out.finalized, out.visible.len());

    // Hidden nodes stay classified.
    let utils = out.graph.get("shared.helpers.utils").unwrap();
    assert_eq!(utils.status(), NodeStatus::Classified);
}

// PIP-02: relative, absolute and root-package imports all land on internal ids
#[test]
fn test_import_resolution_end_to_end() {
    let project = common::billing_project();
    let out = run(project.path(), &ViewRequest::default());

    let facade = out.graph.get("billing.ports.driving.facade").unwrap();
    assert!(facade.imports().contains("billing.app.create_order"));

    let create = out.graph.get("billing.app.create_order").unwrap();
    assert!(create.imports().contains("billing.domain.order"));
    assert!(create.imports().contains("shared.helpers.utils"));

    let containers = out.graph.get("composition_root.containers").unwrap();
    let imports: Vec<_> = containers.imports().iter().map(String::as_str).collect();
    assert_eq!(imports, vec!["billing.ports.driving.facade"]);
    assert!(out.build.dropped_imports >= 1);
}

// PIP-03: passports across scopes
#[test]
fn test_passports_across_scopes() {
    let project = common::billing_project();
    let out = run(project.path(), &ViewRequest::default());

    let facade = out.graph.get("billing.ports.driving.facade").unwrap().passport().unwrap();
    assert_eq!(facade.component_type, ComponentType::Port(PortType::Facade));

    let utils = out.graph.get("shared.helpers.utils").unwrap().passport().unwrap();
    assert_eq!(utils.scope, ScopeType::Shared);

    let containers = out.graph.get("composition_root.containers").unwrap().passport().unwrap();
    assert_eq!(containers.scope, ScopeType::Root);
    assert_eq!(containers.layer, LayerType::Composition);

    assert_eq!(out.classification.classified, out.graph.len());
}

// PIP-04: expansion pulls in imported nodes outside the focus
#[test]
fn test_depth_expands_beyond_focus() {
    let project = common::billing_project();
    let request = ViewRequest::default()
        .with_focus("billing/app")
        .with_depth(1);
    let out = run(project.path(), &request);

    assert!(out.visible.contains("billing.app.create_order"));
    assert!(out.visible.contains("billing.domain.order"));
    assert!(out.visible.contains("shared.helpers.utils"));
    // Two hops away.
    assert!(!out.visible.contains("billing.domain.item"));

    let ids: Vec<_> = out.view.node_ids().collect();
    assert_eq!(ids.len(), out.visible.len());
    assert!(out
        .view
        .edges
        .contains(&("billing.app.create_order".into(), "billing.domain.order".into())));
}

// PIP-05: parse failures abort by default and are collected under skip
#[test]
fn test_parse_failure_policy() {
    let project = common::billing_project();
    common::write(project.path(), "src/billing/app/broken.py", "def (:\n");

    let err = ArchitecturePipeline::run(
        project.path(),
        &StratumConfig::default(),
        &ViewRequest::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PipelineError::Parse(ParseError::Syntax { .. })));

    let mut config = StratumConfig::default();
    config.scan.on_parse_error = Some(ParseFailurePolicy::Skip);
    let result =
        ArchitecturePipeline::run(project.path(), &config, &ViewRequest::default()).unwrap();
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.data.build.unparsable, 1);
    assert!(result.data.graph.get("billing.app.broken").unwrap().imports().is_empty());
}

// PIP-06: the view serializes with context summaries
#[test]
fn test_view_json() {
    let project = common::billing_project();
    let out = run(project.path(), &ViewRequest::default().with_contexts(["billing"]));

    let names: Vec<_> = out.view.contexts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["billing"]);
    let json = out.view.to_json().unwrap();
    assert!(json.contains("\"billing.domain.order\""));
    assert!(!json.contains("shared.helpers.utils\""));
}
