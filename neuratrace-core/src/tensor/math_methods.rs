use crate::error::NeuraTraceError;
use crate::ops;
use crate::tensor::Tensor;

/// Method-style access to the numeric primitives.
///
/// Each method delegates to the corresponding `*_op` function in [`crate::ops`] and
/// returns a freshly allocated tensor; `self` is never modified.
impl Tensor {
    /// Matrix product `self @ other` of two rank-2 tensors.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, NeuraTraceError> {
        ops::linalg::matmul_op(self, other)
    }

    /// Element-wise sum, broadcasting a row vector across the rows of `self`.
    pub fn add(&self, other: &Tensor) -> Result<Tensor, NeuraTraceError> {
        ops::arithmetic::add_op(self, other)
    }

    pub fn relu(&self) -> Tensor {
        ops::activation::relu_op(self)
    }

    pub fn sigmoid(&self) -> Tensor {
        ops::activation::sigmoid_op(self)
    }

    pub fn tanh(&self) -> Tensor {
        ops::activation::tanh_op(self)
    }

    /// Softmax over the whole vector (rank 1) or each row (rank 2).
    pub fn softmax(&self) -> Result<Tensor, NeuraTraceError> {
        ops::activation::softmax_op(self)
    }

    /// Returns the transpose of a rank-2 tensor.
    pub fn transpose_2d(&self) -> Result<Tensor, NeuraTraceError> {
        ops::linalg::transpose_2d_op(self)
    }
}
