//! Data model shared by the engine and its downstream consumers.

pub mod collections;
pub mod graph;
pub mod passport;
pub mod source;
pub mod violation;

pub use collections::{FxHashMap, FxHashSet};
pub use graph::{CodeGraph, CodeNode, NodeStatus};
pub use passport::{
    AdapterType, AppType, ComponentPassport, ComponentType, CompositionType, DirectionType,
    DomainType, GlobalType, LayerType, MatchMethod, PortType, ScopeType,
};
pub use source::{ImportedModule, SourceFile};
pub use violation::{LintReport, Severity, Violation};
