// src/nn/mod.rs
// Operations that can be placed as nodes of a computation graph.

pub mod layers;
pub mod operation;

// Re-export common items
pub use layers::activation::{Activation, ActivationOp};
pub use layers::linear::Linear;
pub use layers::residual::ResidualAdd;
pub use operation::{OpType, Operation, TensorMap};
