//! Tests for the Stratum error handling system.

use std::collections::HashSet;
use std::path::PathBuf;

use stratum_core::errors::error_code::{self, StratumErrorCode};
use stratum_core::errors::*;
use stratum_core::types::NodeStatus;

/// ERR-01: every error enum carries a stable code
#[test]
fn test_all_errors_have_error_code() {
    let scan = ScanError::RootNotFound {
        path: PathBuf::from("/nope"),
    };
    assert_eq!(scan.error_code(), error_code::SCAN_ERROR);

    let syntax = ParseError::Syntax {
        path: PathBuf::from("a.py"),
        line: 3,
        message: "unexpected".into(),
    };
    assert_eq!(syntax.error_code(), error_code::SYNTAX_ERROR);

    let grammar = ParseError::GrammarUnavailable {
        message: "abi".into(),
    };
    assert_eq!(grammar.error_code(), error_code::PARSE_ERROR);

    let graph = GraphError::MissingPassport { id: "a".into() };
    assert_eq!(graph.error_code(), error_code::GRAPH_ERROR);

    let classification = ClassificationError::InvalidRulePattern {
        pattern: "(".into(),
        message: "unclosed group".into(),
    };
    assert_eq!(classification.error_code(), error_code::CLASSIFICATION_ERROR);

    let config = ConfigError::UnknownLayer {
        layer: "infra".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

/// ERR-02: From conversions into PipelineError keep the subsystem code
#[test]
fn test_from_conversions() {
    let pipeline: PipelineError = ScanError::RootNotFound {
        path: PathBuf::from("/nope"),
    }
    .into();
    assert!(matches!(pipeline, PipelineError::Scan(_)));
    assert_eq!(pipeline.error_code(), error_code::SCAN_ERROR);

    let pipeline: PipelineError = GraphError::UnknownNode { id: "x".into() }.into();
    assert!(matches!(pipeline, PipelineError::Graph(_)));

    let pipeline: PipelineError = ParseError::UnsupportedFile {
        path: PathBuf::from("a.txt"),
    }
    .into();
    assert_eq!(pipeline.error_code(), error_code::PARSE_ERROR);
}

/// ERR-03: parse errors expose the offending path
#[test]
fn test_parse_error_path() {
    let err = ParseError::Syntax {
        path: PathBuf::from("billing/bad.py"),
        line: 1,
        message: "x".into(),
    };
    assert_eq!(err.path(), Some(std::path::Path::new("billing/bad.py")));
    assert!(err.to_string().contains("billing/bad.py"));
    assert_eq!(
        ParseError::GrammarUnavailable {
            message: "m".into()
        }
        .path(),
        None
    );
}

/// ERR-04: coded strings are prefixed and codes are distinct
#[test]
fn test_coded_string_and_uniqueness() {
    let err = GraphError::StatusRegression {
        id: "a".into(),
        from: NodeStatus::Classified,
        to: NodeStatus::Linked,
    };
    let coded = err.coded_string();
    assert!(coded.starts_with("[GRAPH_ERROR]"));
    assert!(coded.contains("classified"));

    let codes: HashSet<&str> = [
        error_code::SCAN_ERROR,
        error_code::PARSE_ERROR,
        error_code::SYNTAX_ERROR,
        error_code::GRAPH_ERROR,
        error_code::CLASSIFICATION_ERROR,
        error_code::CONFIG_ERROR,
        error_code::PIPELINE_ERROR,
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 7);
}

/// ERR-05: PipelineResult accumulates non-fatal errors
#[test]
fn test_pipeline_result() {
    let mut result: PipelineResult<Vec<u32>> = PipelineResult::new(vec![1]);
    assert!(result.is_clean());

    result.add_error(ParseError::UnsupportedFile {
        path: PathBuf::from("a.txt"),
    });
    assert_eq!(result.error_count(), 1);

    let mapped = result.map(|v| v.len());
    assert_eq!(mapped.data, 1);
    assert_eq!(mapped.error_count(), 1);
}
