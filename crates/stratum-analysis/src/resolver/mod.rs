//! Import resolution: dotted paths to files and back, and symbol origin lookup.

pub mod module_path;
pub mod symbol;

pub use module_path::ModulePathResolver;
pub use symbol::SymbolResolver;
