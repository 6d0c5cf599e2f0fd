use crate::ops::apply_unary_op;
use crate::tensor::Tensor;

/// Applies the Rectified Linear Unit (ReLU) activation function element-wise.
/// ReLU(x) = max(0, x)
pub fn relu_op(input: &Tensor) -> Tensor {
    apply_unary_op(input, |x| if x > 0.0 { x } else { 0.0 })
}
