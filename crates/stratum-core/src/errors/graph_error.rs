//! Graph lifecycle errors.

use super::error_code::{self, StratumErrorCode};
use crate::types::graph::NodeStatus;

/// Errors raised when a pipeline stage violates a node lifecycle invariant.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Node {id} cannot move from {from} back to {to}")]
    StatusRegression {
        id: String,
        from: NodeStatus,
        to: NodeStatus,
    },

    #[error("Node {id} has no passport and cannot be finalized")]
    MissingPassport { id: String },

    #[error("Unknown node: {id}")]
    UnknownNode { id: String },
}

impl StratumErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
