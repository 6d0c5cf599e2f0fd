use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Applies the hyperbolic tangent element-wise.
pub fn tanh_op(input: &Tensor) -> Tensor {
    apply_unary_op(input, f32::tanh)
}
