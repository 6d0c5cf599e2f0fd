use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Applies the logistic sigmoid element-wise: 1 / (1 + e^-x).
pub fn sigmoid_op(input: &Tensor) -> Tensor {
    apply_unary_op(input, |x| 1.0 / (1.0 + (-x).exp()))
}
