//! stratum-analysis: the architecture engine.
//!
//! Reads a source tree, reconstructs its module dependency graph, stamps every
//! module with a component passport, and shapes the classified graph into the
//! view requested by downstream linters and renderers.
//!
//! Reader → Import Parser → Graph Builder → Classification Engine → Graph Shaper

pub mod classification;
pub mod graph;
pub mod parsers;
pub mod pipeline;
pub mod resolver;
pub mod scanner;
pub mod shaping;

pub use classification::ClassificationEngine;
pub use graph::GraphBuilder;
pub use pipeline::{ArchitecturePipeline, PipelineOutput};
pub use scanner::SourceReader;
pub use shaping::{determine_initial_focus, expand, finalize, GraphView, ViewRequest};
