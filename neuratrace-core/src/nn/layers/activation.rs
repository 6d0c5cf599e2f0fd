use crate::error::NeuraTraceError;
use crate::nn::layers::{INPUT_PORTS, OUTPUT_PORTS};
use crate::nn::operation::{input, single_output, OpType, Operation, TensorMap};
use crate::ops::activation::{relu_op, sigmoid_op, softmax_op, tanh_op};

/// The parameter-free activation functions available as graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    ReLU,
    Sigmoid,
    Tanh,
    Softmax,
}

impl Activation {
    pub fn op_type(&self) -> OpType {
        match self {
            Activation::ReLU => OpType::ReLU,
            Activation::Sigmoid => OpType::Sigmoid,
            Activation::Tanh => OpType::Tanh,
            Activation::Softmax => OpType::Softmax,
        }
    }
}

/// Operation applying an [`Activation`] to its single `input` port.
///
/// This operation does not have any parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationOp {
    activation: Activation,
}

impl ActivationOp {
    pub fn new(activation: Activation) -> Self {
        ActivationOp { activation }
    }

    pub fn relu() -> Self {
        Self::new(Activation::ReLU)
    }

    pub fn sigmoid() -> Self {
        Self::new(Activation::Sigmoid)
    }

    pub fn tanh() -> Self {
        Self::new(Activation::Tanh)
    }

    pub fn softmax() -> Self {
        Self::new(Activation::Softmax)
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }
}

impl Operation for ActivationOp {
    fn op_type(&self) -> OpType {
        self.activation.op_type()
    }

    fn input_names(&self) -> &'static [&'static str] {
        INPUT_PORTS
    }

    fn output_names(&self) -> &'static [&'static str] {
        OUTPUT_PORTS
    }

    fn compute(&self, inputs: &TensorMap) -> Result<TensorMap, NeuraTraceError> {
        let x = input(inputs, self.op_type(), INPUT_PORTS[0])?;
        let y = match self.activation {
            Activation::ReLU => relu_op(x),
            Activation::Sigmoid => sigmoid_op(x),
            Activation::Tanh => tanh_op(x),
            Activation::Softmax => softmax_op(x)?,
        };
        Ok(single_output(OUTPUT_PORTS[0], y))
    }

    fn describe(&self) -> String {
        match self.activation {
            Activation::ReLU => "ReLU: max(0, x)".to_string(),
            Activation::Sigmoid => "Sigmoid: 1 / (1 + exp(-x))".to_string(),
            Activation::Tanh => "Tanh: tanh(x)".to_string(),
            Activation::Softmax => "Softmax: exp(x - max) / sum over last axis".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Tensor;
    use crate::utils::testing::check_tensor_near;

    #[test]
    fn test_constructors_select_activation() {
        let cases = [
            (ActivationOp::relu(), Activation::ReLU, OpType::ReLU),
            (ActivationOp::sigmoid(), Activation::Sigmoid, OpType::Sigmoid),
            (ActivationOp::tanh(), Activation::Tanh, OpType::Tanh),
            (ActivationOp::softmax(), Activation::Softmax, OpType::Softmax),
        ];
        for (op, activation, op_type) in cases {
            assert_eq!(op.activation(), activation);
            assert_eq!(op.op_type(), op_type);
            assert!(op.named_parameters().is_empty());
        }
    }

    #[test]
    fn test_compute_reads_input_port() -> Result<(), NeuraTraceError> {
        let mut inputs = TensorMap::new();
        inputs.insert("input".to_string(), Tensor::new(vec![-1.0, 2.0], vec![2])?);
        let outputs = ActivationOp::relu().compute(&inputs)?;
        check_tensor_near(&outputs["output"], &[2], &[0.0, 2.0], 0.0);

        let err = ActivationOp::tanh().compute(&TensorMap::new()).unwrap_err();
        assert!(matches!(err, NeuraTraceError::MissingInput { .. }));
        Ok(())
    }
}
