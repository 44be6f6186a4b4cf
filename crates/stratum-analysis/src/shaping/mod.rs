//! Graph shaping: filter, expand and prune an already-classified graph.
//!
//! The three operations are independent. The usual composition is
//! `determine_initial_focus` → `expand` → `finalize`, then `GraphView` for
//! the visualizer.

pub mod expand;
pub mod filter;
pub mod prune;
pub mod view;

pub use expand::expand;
pub use filter::{determine_initial_focus, ViewRequest};
pub use prune::finalize;
pub use view::{ContextSummary, GraphView, ViewNode};
