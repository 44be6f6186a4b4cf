//! Import extraction from source text.
//!
//! Parsing is tree-sitter based. Only import statements are extracted; the
//! rest of the syntax tree is discarded once the walk completes.

pub mod python;

pub use python::{anchor_relative, ImportParser};
