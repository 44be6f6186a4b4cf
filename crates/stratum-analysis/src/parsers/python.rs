//! Python import parser.

use std::path::Path;

use stratum_core::errors::ParseError;
use stratum_core::types::ImportedModule;
use tree_sitter::{Node, Parser};

use crate::scanner::language_detect::{is_package_initializer, Language};

/// Wildcard symbol recorded for `from x import *`.
pub const WILDCARD: &str = "*";

/// Extracts import statements from Python source.
///
/// Holds one tree-sitter parser; reuse the instance across files.
pub struct ImportParser {
    parser: Parser,
}

impl ImportParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&Language::Python.ts_language())
            .map_err(|e| ParseError::GrammarUnavailable {
                message: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Parse `source` and return its imports in source order.
    ///
    /// `logical_path` is the dotted path of the module being parsed; relative
    /// imports are anchored against it.
    pub fn parse(
        &mut self,
        source: &str,
        path: &Path,
        logical_path: &str,
    ) -> Result<Vec<ImportedModule>, ParseError> {
        if Language::from_path(path) != Some(Language::Python) {
            return Err(ParseError::UnsupportedFile {
                path: path.to_path_buf(),
            });
        }

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Syntax {
                path: path.to_path_buf(),
                line: 1,
                message: "parser produced no syntax tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, message) = first_error(root, source.as_bytes());
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line,
                message,
            });
        }

        let ctx = AnchorContext {
            logical_path,
            is_package: is_package_initializer(path),
        };
        let bytes = source.as_bytes();
        let mut imports = Vec::new();

        // Iterative walk; imports may sit inside functions, classes, or try blocks.
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            match node.kind() {
                "import_statement" => collect_plain_import(node, bytes, &mut imports),
                "import_from_statement" => {
                    if let Some(import) = collect_from_import(node, bytes, &ctx) {
                        imports.push(import);
                    }
                }
                "future_import_statement" => {}
                _ => {
                    let mut cursor = node.walk();
                    let children: Vec<Node> = node.named_children(&mut cursor).collect();
                    stack.extend(children.into_iter().rev());
                }
            }
        }

        tracing::trace!(path = %path.display(), count = imports.len(), "imports extracted");
        Ok(imports)
    }
}

struct AnchorContext<'a> {
    logical_path: &'a str,
    is_package: bool,
}

/// `import a.b, c as d`: one record per imported module.
fn collect_plain_import(node: Node, source: &[u8], out: &mut Vec<ImportedModule>) {
    let line = line_of(node);
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let dotted = match name.kind() {
            "aliased_import" => name.child_by_field_name("name"),
            _ => Some(name),
        };
        if let Some(module) = dotted.map(|n| dotted_text(n, source)) {
            if !module.is_empty() {
                out.push(ImportedModule::new(module, line, false));
            }
        }
    }
}

/// `from <module> import <names>`: one record carrying every imported name.
fn collect_from_import(node: Node, source: &[u8], ctx: &AnchorContext) -> Option<ImportedModule> {
    let module_node = node.child_by_field_name("module_name")?;
    let line = line_of(node);

    let mut import = match module_node.kind() {
        "relative_import" => {
            let (level, module) = relative_parts(module_node, source);
            let anchored = anchor_relative(ctx.logical_path, level, ctx.is_package, &module);
            ImportedModule::new(anchored, line, true)
        }
        _ => ImportedModule::new(dotted_text(module_node, source), line, false),
    };

    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        let original = match name.kind() {
            "aliased_import" => name.child_by_field_name("name"),
            _ => Some(name),
        };
        if let Some(symbol) = original.map(|n| dotted_text(n, source)) {
            if !symbol.is_empty() {
                import.push_name(symbol);
            }
        }
    }

    let mut cursor = node.walk();
    if node
        .named_children(&mut cursor)
        .any(|c| c.kind() == "wildcard_import")
    {
        import.push_name(WILDCARD);
    }

    Some(import)
}

/// Split a `relative_import` node into its level and optional module suffix.
fn relative_parts(node: Node, source: &[u8]) -> (usize, String) {
    let mut level = 0;
    let mut module = String::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_prefix" => {
                level = child
                    .utf8_text(source)
                    .map(|t| t.chars().filter(|c| *c == '.').count())
                    .unwrap_or(0);
            }
            "dotted_name" => module = dotted_text(child, source),
            _ => {}
        }
    }
    (level, module)
}

/// Resolve a relative import against the importing module's logical path.
///
/// A package initializer already names its package, so level 1 stays in it.
/// A level deeper than the available segments anchors at the root (`""`).
pub fn anchor_relative(logical_path: &str, level: usize, is_package: bool, module: &str) -> String {
    let segments: Vec<&str> = logical_path.split('.').filter(|s| !s.is_empty()).collect();
    let strip = if is_package {
        level.saturating_sub(1)
    } else {
        level
    };

    let base: &[&str] = if strip >= segments.len() {
        &[]
    } else {
        &segments[..segments.len() - strip]
    };

    let mut parts: Vec<&str> = base.to_vec();
    parts.extend(module.split('.').filter(|s| !s.is_empty()));
    parts.join(".")
}

fn dotted_text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source)
        .map(|t| t.chars().filter(|c| !c.is_whitespace()).collect())
        .unwrap_or_default()
}

fn line_of(node: Node) -> u32 {
    node.start_position().row as u32 + 1
}

/// Locate the first error or missing node for the diagnostic.
fn first_error(root: Node, source: &[u8]) -> (u32, String) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                let text = node.utf8_text(source).unwrap_or("").trim();
                let snippet: String = text.chars().take(40).collect();
                format!("unexpected {snippet:?}")
            };
            return (line_of(node), message);
        }
        if node.has_error() {
            let mut cursor = node.walk();
            let children: Vec<Node> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }
    (line_of(root), "invalid syntax".to_string())
}
