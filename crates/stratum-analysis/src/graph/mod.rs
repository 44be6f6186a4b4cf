//! Graph construction: reader output in, linked `CodeGraph` out.

pub mod builder;
pub mod types;

pub use builder::{BuiltGraph, GraphBuilder};
pub use types::{BuildStats, ModuleRegistry, ScannedModule};
