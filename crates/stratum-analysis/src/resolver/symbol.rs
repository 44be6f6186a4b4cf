//! Symbol origin lookup across re-export chains.

use stratum_core::types::FxHashSet;

use crate::graph::types::{join_module, ModuleRegistry};

/// Finds the module that actually defines a symbol.
///
/// Resolution order at each step: a child module named like the symbol, then
/// the first import that brings the symbol in, else the current module.
pub struct SymbolResolver<'a> {
    registry: &'a ModuleRegistry,
}

impl<'a> SymbolResolver<'a> {
    pub fn new(registry: &'a ModuleRegistry) -> Self {
        Self { registry }
    }

    /// Origin of `symbol` as seen from `module`.
    ///
    /// Iterative, so chain length does not touch the call stack. The symbol is
    /// fixed for one resolution, so a revisited module is a revisited
    /// `(module, symbol)` pair. A step that would revisit one ends the walk at
    /// the module taking that step.
    pub fn resolve(&self, module: &str, symbol: &str) -> String {
        let mut current = self
            .registry
            .lookup(module)
            .map(str::to_string)
            .unwrap_or_else(|| module.to_string());
        let mut visited: FxHashSet<String> = FxHashSet::default();
        visited.insert(current.clone());

        loop {
            if let Some(child) = self.registry.lookup(&join_module(&current, symbol)) {
                return child.to_string();
            }

            let Some(scanned) = self.registry.get(&current) else {
                return current;
            };

            let next = scanned
                .raw_imports
                .iter()
                .filter(|import| import.brings(symbol))
                .find_map(|import| {
                    self.registry
                        .resolve_module(import)
                        .filter(|target| *target != current)
                });

            match next {
                Some(target) if visited.contains(&target) => {
                    tracing::trace!(module = %current, target = %target, symbol, "re-export cycle");
                    return current;
                }
                Some(target) => {
                    visited.insert(target.clone());
                    current = target;
                }
                None => return current,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::ScannedModule;
    use std::path::PathBuf;
    use stratum_core::types::ImportedModule;

    fn module(logical: &str, imports: Vec<ImportedModule>) -> ScannedModule {
        ScannedModule {
            logical_path: logical.to_string(),
            file_path: PathBuf::from(format!("{}.py", logical.replace('.', "/"))),
            content: None,
            raw_imports: imports,
        }
    }

    fn reexport(from: &str, symbol: &str) -> ImportedModule {
        let mut import = ImportedModule::new(from, 1, false);
        import.push_name(symbol);
        import
    }

    #[test]
    fn follows_reexport_chain() {
        let mut registry = ModuleRegistry::new(None);
        registry.insert(module("a", vec![reexport("b", "Thing")]));
        registry.insert(module("b", vec![reexport("c", "Thing")]));
        registry.insert(module("c", vec![]));

        let resolver = SymbolResolver::new(&registry);
        assert_eq!(resolver.resolve("a", "Thing"), "c");
    }

    #[test]
    fn submodule_beats_reexport() {
        let mut registry = ModuleRegistry::new(None);
        registry.insert(module("pkg", vec![reexport("other", "order")]));
        registry.insert(module("pkg.order", vec![]));
        registry.insert(module("other", vec![]));

        let resolver = SymbolResolver::new(&registry);
        assert_eq!(resolver.resolve("pkg", "order"), "pkg.order");
    }

    #[test]
    fn two_node_cycle_terminates() {
        let mut registry = ModuleRegistry::new(None);
        registry.insert(module("a", vec![reexport("b", "X")]));
        registry.insert(module("b", vec![reexport("a", "X")]));

        let resolver = SymbolResolver::new(&registry);
        assert_eq!(resolver.resolve("a", "X"), "b");
        assert_eq!(resolver.resolve("b", "X"), "a");
    }

    #[test]
    fn unexplained_symbol_is_local() {
        let mut registry = ModuleRegistry::new(None);
        registry.insert(module("a", vec![reexport("requests", "get")]));

        let resolver = SymbolResolver::new(&registry);
        assert_eq!(resolver.resolve("a", "Local"), "a");
        assert_eq!(resolver.resolve("a", "get"), "a");
    }
}
