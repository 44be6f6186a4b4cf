//! Graph builder: parses every module, then links imports to node ids.
//!
//! Two passes. The first registers every module so that the second can
//! resolve submodules and re-export chains against the complete registry.

use std::path::{Path, PathBuf};

use stratum_core::config::ParseFailurePolicy;
use stratum_core::errors::{ParseError, PipelineError, PipelineResult};
use stratum_core::types::{CodeGraph, CodeNode, NodeStatus, SourceFile};

use super::types::{BuildStats, ModuleRegistry, ScannedModule};
use crate::parsers::python::WILDCARD;
use crate::parsers::ImportParser;
use crate::resolver::{ModulePathResolver, SymbolResolver};
use crate::scanner::language_detect::Language;

/// A linked graph plus the counters from building it.
#[derive(Debug, Clone, Default)]
pub struct BuiltGraph {
    pub graph: CodeGraph,
    pub stats: BuildStats,
}

/// Turns reader output into a linked `CodeGraph`.
pub struct GraphBuilder {
    paths: ModulePathResolver,
    root_package: Option<String>,
    parser: ImportParser,
}

impl GraphBuilder {
    /// `root_package` is the name absolute imports may use for the source root.
    pub fn new(source_root: &Path, root_package: Option<String>) -> Result<Self, ParseError> {
        // A single-file root resolves module names against its directory.
        let root = if source_root.is_file() {
            source_root
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."))
        } else {
            source_root.to_path_buf()
        };
        Ok(Self {
            paths: ModulePathResolver::new(root),
            root_package,
            parser: ImportParser::new()?,
        })
    }

    pub fn path_resolver(&self) -> &ModulePathResolver {
        &self.paths
    }

    /// Build, stopping at the first file that fails to parse.
    pub fn build<I>(&mut self, files: I) -> Result<BuiltGraph, PipelineError>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let result = self.build_with_policy(files, ParseFailurePolicy::Abort)?;
        Ok(result.data)
    }

    /// Build, registering unparsable files with no imports and recording the
    /// parse error as non-fatal.
    pub fn build_tolerant<I>(&mut self, files: I) -> Result<PipelineResult<BuiltGraph>, PipelineError>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        self.build_with_policy(files, ParseFailurePolicy::Skip)
    }

    pub fn build_with_policy<I>(
        &mut self,
        files: I,
        policy: ParseFailurePolicy,
    ) -> Result<PipelineResult<BuiltGraph>, PipelineError>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut result = PipelineResult::<BuiltGraph>::default();
        let mut stats = BuildStats::default();
        let registry = self.register(files, policy, &mut stats, &mut result)?;
        let graph = link(&registry, &mut stats)?;

        tracing::info!(
            modules = stats.modules,
            resolved = stats.resolved_imports,
            dropped = stats.dropped_imports,
            unreadable = stats.unreadable,
            unparsable = stats.unparsable,
            "graph built"
        );

        result.data = BuiltGraph { graph, stats };
        Ok(result)
    }

    fn register<I>(
        &mut self,
        files: I,
        policy: ParseFailurePolicy,
        stats: &mut BuildStats,
        result: &mut PipelineResult<BuiltGraph>,
    ) -> Result<ModuleRegistry, PipelineError>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut registry = ModuleRegistry::new(self.root_package.clone());

        for file in files {
            if Language::from_path(&file.path).is_none() {
                stats.skipped_files += 1;
                continue;
            }
            let Some(logical_path) = self.paths.reverse(&file.path) else {
                tracing::warn!(path = %file.path.display(), "file outside source root");
                stats.skipped_files += 1;
                continue;
            };

            let raw_imports = match file.content.as_deref() {
                Some(text) if file.is_readable() => {
                    match self.parser.parse(text, &file.path, &logical_path) {
                        Ok(imports) => imports,
                        Err(e) => match policy {
                            ParseFailurePolicy::Abort => return Err(e.into()),
                            ParseFailurePolicy::Skip => {
                                tracing::warn!(error = %e, "registering unparsable module without imports");
                                stats.unparsable += 1;
                                result.add_error(e);
                                Vec::new()
                            }
                        },
                    }
                }
                _ => {
                    tracing::debug!(
                        path = %file.path.display(),
                        reason = file.reading_error.as_deref().unwrap_or("no content"),
                        "registering unreadable module without imports"
                    );
                    stats.unreadable += 1;
                    Vec::new()
                }
            };

            let module = ScannedModule {
                logical_path,
                file_path: file.path,
                content: file.content,
                raw_imports,
            };

            // A package initializer owns its dotted path over a same-named module file.
            if let Some(existing) = registry.get(&module.logical_path) {
                if existing.is_package() && !module.is_package() {
                    tracing::debug!(id = %existing.logical_path, "module shadowed by package");
                    continue;
                }
            }
            registry.insert(module);
        }

        stats.modules = registry.len();
        Ok(registry)
    }
}

/// Second pass: one node per registered module, edges for internal targets.
fn link(registry: &ModuleRegistry, stats: &mut BuildStats) -> Result<CodeGraph, PipelineError> {
    let symbols = SymbolResolver::new(registry);
    let mut graph = CodeGraph::new();

    for module in registry.modules() {
        let mut node = CodeNode::new(module.logical_path.as_str(), module.file_path.as_path());

        for import in &module.raw_imports {
            if import.imported_names.is_empty() {
                match registry.resolve_module(import) {
                    Some(target) => {
                        stats.resolved_imports += 1;
                        node.add_import(target);
                    }
                    None => stats.dropped_imports += 1,
                }
                continue;
            }

            let base = registry.resolve_module(import);
            for name in &import.imported_names {
                let target = if name == WILDCARD {
                    base.clone()
                } else if let Some(child) = registry.resolve_submodule(import, name) {
                    Some(child)
                } else {
                    base.as_deref().map(|b| symbols.resolve(b, name))
                };

                match target {
                    Some(target) => {
                        stats.resolved_imports += 1;
                        node.add_import(target);
                    }
                    None => stats.dropped_imports += 1,
                }
            }
        }

        node.advance(NodeStatus::Linked)?;
        graph.insert(node);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(root: &Path, rel: &str, text: &str) -> SourceFile {
        SourceFile::readable(root.join(rel), text)
    }

    #[test]
    fn links_relative_and_absolute_imports() {
        let root = Path::new("/proj/src");
        let files = vec![
            file(root, "billing/domain/order.py", "from .item import Item\n"),
            file(root, "billing/domain/item.py", "class Item: ...\n"),
            file(
                root,
                "billing/app/create_order.py",
                "import src.billing.domain.order\nimport requests\n",
            ),
        ];

        let mut builder = GraphBuilder::new(root, Some("src".to_string())).unwrap();
        let built = builder.build(files).unwrap();
        let graph = &built.graph;

        let order = graph.get("billing.domain.order").unwrap();
        assert!(order.imports().contains("billing.domain.item"));
        assert_eq!(order.status(), NodeStatus::Linked);

        let create = graph.get("billing.app.create_order").unwrap();
        assert_eq!(create.imports().len(), 1);
        assert!(create.imports().contains("billing.domain.order"));
        assert_eq!(built.stats.dropped_imports, 1);
    }

    #[test]
    fn unreadable_files_become_isolated_nodes() {
        let root = Path::new("/proj/src");
        let files = vec![SourceFile::unreadable(root.join("blob.py"), "binary")];

        let mut builder = GraphBuilder::new(root, None).unwrap();
        let built = builder.build(files).unwrap();
        assert!(built.graph.get("blob").unwrap().imports().is_empty());
        assert_eq!(built.stats.unreadable, 1);
    }

    #[test]
    fn parse_failure_policy() {
        let root = Path::new("/proj/src");
        let files = || vec![file(root, "bad.py", "def (:\n"), file(root, "ok.py", "x = 1\n")];

        let mut builder = GraphBuilder::new(root, None).unwrap();
        assert!(matches!(
            builder.build(files()),
            Err(PipelineError::Parse(ParseError::Syntax { .. }))
        ));

        let result = builder.build_tolerant(files()).unwrap();
        assert_eq!(result.error_count(), 1);
        assert!(result.data.graph.contains("bad"));
        assert!(result.data.graph.contains("ok"));
    }

    #[test]
    fn from_package_import_prefers_submodule() {
        let root = Path::new("/proj/src");
        let files = vec![
            file(root, "billing/__init__.py", ""),
            file(root, "billing/domain/__init__.py", "from .order import Order\n"),
            file(root, "billing/domain/order.py", "class Order: ...\n"),
            file(root, "billing/app/use.py", "from billing.domain import order, Order\n"),
        ];

        let mut builder = GraphBuilder::new(root, None).unwrap();
        let graph = builder.build(files).unwrap().graph;
        let node = graph.get("billing.app.use").unwrap();
        let imports: Vec<_> = node.imports().iter().map(String::as_str).collect();
        assert_eq!(imports, vec!["billing.domain.order"]);
    }
}
