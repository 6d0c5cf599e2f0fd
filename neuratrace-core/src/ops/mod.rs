//! # Tensor Operations Module (`ops`)
//!
//! Numeric primitives on [`Tensor`] values, grouped by functionality.
//!
//! ## Structure:
//!
//! - **`_op` functions:** each primitive is a free function named `xxx_op` that reads its
//!   inputs and allocates a new output tensor. Inputs are never modified in place, which is
//!   what lets a single graph run concurrently from independent executions.
//! - **Tensor methods:** `Tensor::matmul`, `Tensor::softmax`, ... delegate to these functions.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: element-wise addition with row broadcasting.
//! - [`linalg`]: matrix product and 2D transpose.
//! - [`activation`]: ReLU, Sigmoid, Tanh and Softmax.

use crate::tensor::Tensor;

pub mod activation;
pub mod arithmetic;
pub mod linalg;

/// Applies a unary element-wise function to a tensor, returning a new tensor of the same shape.
pub(crate) fn apply_unary_op<F>(a: &Tensor, op: F) -> Tensor
where
    F: Fn(f32) -> f32,
{
    let output_data: Vec<f32> = a.data().iter().map(|&val| op(val)).collect();
    Tensor::from_parts(output_data, a.shape().to_vec())
}
