// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear functions applied element-wise (ReLU, Sigmoid, Tanh) or along the last
//! axis (Softmax). All of them return a new tensor.

pub mod relu;
pub mod sigmoid;
pub mod softmax;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use softmax::softmax_op;
pub use tanh::tanh_op;

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
