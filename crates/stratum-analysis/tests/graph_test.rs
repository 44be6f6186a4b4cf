//! GRF-01 through GRF-05: module resolution and graph construction.

mod common;

use std::path::Path;

use stratum_analysis::graph::{GraphBuilder, ModuleRegistry, ScannedModule};
use stratum_analysis::parsers::ImportParser;
use stratum_analysis::resolver::{ModulePathResolver, SymbolResolver};
use stratum_analysis::scanner::SourceReader;
use stratum_core::config::ScanConfig;
use stratum_core::types::{ImportedModule, NodeStatus};
use tempfile::TempDir;

fn scanned(logical: &str, imports: Vec<ImportedModule>) -> ScannedModule {
    ScannedModule {
        logical_path: logical.to_string(),
        file_path: Path::new("/src").join(format!("{}.py", logical.replace('.', "/"))),
        content: None,
        raw_imports: imports,
    }
}

fn from_import(module: &str, names: &[&str]) -> ImportedModule {
    let mut import = ImportedModule::new(module, 1, false);
    for name in names {
        import.push_name(*name);
    }
    import
}

// GRF-01: forward and reverse agree on real files
#[test]
fn test_module_paths_on_disk() {
    let dir = TempDir::new().unwrap();
    common::write(dir.path(), "billing/__init__.py", "");
    common::write(dir.path(), "billing/domain/order.py", "");

    let resolver = ModulePathResolver::new(dir.path());
    let order = resolver.forward("billing.domain.order").unwrap();
    assert_eq!(resolver.reverse(&order).as_deref(), Some("billing.domain.order"));

    let package = resolver.forward("billing").unwrap();
    assert!(package.ends_with("billing/__init__.py"));
    assert_eq!(resolver.reverse(&package).as_deref(), Some("billing"));

    assert!(resolver.forward("billing.missing").is_none());
    assert!(resolver.reverse(Path::new("/elsewhere/x.py")).is_none());
}

// GRF-02: re-export chains end at the defining module
#[test]
fn test_symbol_follows_reexports() {
    let mut registry = ModuleRegistry::new(None);
    registry.insert(scanned("api", vec![from_import("billing", &["Order"])]));
    registry.insert(scanned("billing", vec![from_import("billing.domain", &["Order"])]));
    registry.insert(scanned("billing.domain", vec![from_import("billing.domain.model", &["Order"])]));
    registry.insert(scanned("billing.domain.model", vec![]));

    let symbols = SymbolResolver::new(&registry);
    assert_eq!(symbols.resolve("api", "Order"), "billing.domain.model");
    assert_eq!(symbols.resolve("billing.domain.model", "Order"), "billing.domain.model");
}

// GRF-03: a symbol cycle terminates
#[test]
fn test_symbol_cycle_terminates() {
    let mut registry = ModuleRegistry::new(None);
    registry.insert(scanned("a", vec![from_import("b", &["X"])]));
    registry.insert(scanned("b", vec![from_import("c", &["X"])]));
    registry.insert(scanned("c", vec![from_import("a", &["X"])]));

    // The walk stops at the module whose next step closes the loop.
    let symbols = SymbolResolver::new(&registry);
    assert_eq!(symbols.resolve("a", "X"), "c");
    assert_eq!(symbols.resolve("b", "X"), "a");
}

// GRF-04: the whole reader-to-graph path links and skips as expected
#[test]
fn test_build_from_reader() {
    let project = common::billing_project();
    common::write(project.path(), "src/billing/README.md", "docs\n");
    let source_root = project.path().join("src");

    let reader = SourceReader::open(&source_root, &ScanConfig::default()).unwrap();
    let mut builder = GraphBuilder::new(&source_root, Some("src".into())).unwrap();
    let built = builder.build(reader.files()).unwrap();

    assert_eq!(built.stats.skipped_files, 1);
    assert_eq!(built.stats.modules, built.graph.len());
    assert!(built.graph.nodes().all(|n| n.status() == NodeStatus::Linked));
    // Every edge points at a node in the graph.
    assert!(built.graph.edges().all(|(_, to)| built.graph.contains(to)));
}

// GRF-05: imports inside function bodies and try blocks are found
#[test]
fn test_nested_imports_are_found() {
    let source = "\
try:
    import billing.domain.order
except ImportError:
    pass

class Service:
    def run(self):
        from billing.domain import item
";
    let mut parser = ImportParser::new().unwrap();
    let imports = parser
        .parse(source, Path::new("billing/app/service.py"), "billing.app.service")
        .unwrap();
    let paths: Vec<_> = imports.iter().map(|i| i.module_path.as_str()).collect();
    assert_eq!(paths, vec!["billing.domain.order", "billing.domain"]);
    assert_eq!(imports[1].line_number, 8);
}
