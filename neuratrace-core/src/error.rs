use crate::graph::PortRef;
use thiserror::Error;

/// Custom error type for the NeuraTrace core.
///
/// Every failure is synchronous and local: it aborts the call that triggered it
/// (`add_op`, `connect`, `topological_order`, `Executor::run` or a tensor primitive)
/// and no partial result is returned.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NeuraTraceError {
    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid shape {shape:?}: every dimension must be positive")]
    InvalidShape { shape: Vec<usize> },

    #[error("Rank mismatch: expected rank {expected}, got {actual} during operation {operation}")]
    RankMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Operation id '{0}' is already registered in the graph")]
    DuplicateOpId(String),

    #[error("Operation id '{0}' is reserved for the graph input")]
    ReservedOpId(String),

    #[error("Unknown operation id '{0}'")]
    UnknownOp(String),

    #[error("Operation '{op_id}' has no input port named '{port}'")]
    UnknownPort { op_id: String, port: String },

    #[error("Cycle detected in the operation graph: scheduled {scheduled} of {total} operations")]
    CycleDetected { scheduled: usize, total: usize },

    #[error("Missing dependency for input '{port}' of operation '{op_id}' (producer: {producer:?})")]
    MissingDependency {
        op_id: String,
        port: String,
        producer: Option<PortRef>,
    },

    #[error("Operation {operation} called without input port '{port}'")]
    MissingInput { operation: String, port: String },
}

impl NeuraTraceError {
    /// Returns `true` for every variant of the shape error family
    /// (construction length, rank, dimension, broadcast and reshape failures).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            NeuraTraceError::TensorCreationError { .. }
                | NeuraTraceError::InvalidShape { .. }
                | NeuraTraceError::RankMismatch { .. }
                | NeuraTraceError::ShapeMismatch { .. }
                | NeuraTraceError::BroadcastError { .. }
        )
    }
}
