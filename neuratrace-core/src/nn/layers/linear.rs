use crate::error::NeuraTraceError;
use crate::nn::layers::{INPUT_PORTS, OUTPUT_PORTS};
use crate::nn::operation::{input, single_output, OpType, Operation, TensorMap};
use crate::ops::arithmetic::add_op;
use crate::ops::linalg::matmul_op;
use crate::tensor::{xavier_uniform, zeros, Tensor};
use rand::Rng;

/// Applies an affine transformation to the incoming data: y = x @ W + b
///
/// `weight` has shape `[in_features, out_features]` and `bias` has shape `[out_features]`.
/// The input is either a batch `[batch, in_features]` or a single sample `[in_features]`,
/// in which case the output is `[out_features]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    weight: Tensor,
    bias: Tensor,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer with Xavier-uniform weights and a zero bias.
    ///
    /// # Arguments
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Size of each output sample.
    /// * `rng` - Generator used for the weights; a fixed seed yields fixed parameters.
    pub fn new<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        rng: &mut R,
    ) -> Result<Self, NeuraTraceError> {
        let weight = xavier_uniform(in_features, out_features, rng)?;
        let bias = zeros(&[out_features])?;
        Ok(Linear {
            weight,
            bias,
            in_features,
            out_features,
        })
    }

    /// Creates a Linear layer from explicit parameters.
    ///
    /// # Errors
    /// Returns `NeuraTraceError::RankMismatch` if `weight` is not rank 2 and
    /// `NeuraTraceError::ShapeMismatch` if `bias` is not `[out_features]`.
    pub fn from_parameters(weight: Tensor, bias: Tensor) -> Result<Self, NeuraTraceError> {
        let (in_features, out_features) = match weight.shape() {
            &[i, o] => (i, o),
            shape => {
                return Err(NeuraTraceError::RankMismatch {
                    expected: 2,
                    actual: shape.len(),
                    operation: "Linear weight".to_string(),
                })
            }
        };
        if bias.shape() != [out_features] {
            return Err(NeuraTraceError::ShapeMismatch {
                expected: vec![out_features],
                actual: bias.shape().to_vec(),
                operation: "Linear bias".to_string(),
            });
        }
        Ok(Linear {
            weight,
            bias,
            in_features,
            out_features,
        })
    }

    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    pub fn bias(&self) -> &Tensor {
        &self.bias
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// Computes `x @ W + b` for a batch or a single sample.
    pub fn forward(&self, x: &Tensor) -> Result<Tensor, NeuraTraceError> {
        if x.rank() == 1 {
            let row = x.clone().into_shape(vec![1, x.numel()])?;
            let y = add_op(&matmul_op(&row, &self.weight)?, &self.bias)?;
            return y.into_shape(vec![self.out_features]);
        }
        add_op(&matmul_op(x, &self.weight)?, &self.bias)
    }
}

impl Operation for Linear {
    fn op_type(&self) -> OpType {
        OpType::Linear
    }

    fn input_names(&self) -> &'static [&'static str] {
        INPUT_PORTS
    }

    fn output_names(&self) -> &'static [&'static str] {
        OUTPUT_PORTS
    }

    fn compute(&self, inputs: &TensorMap) -> Result<TensorMap, NeuraTraceError> {
        let x = input(inputs, OpType::Linear, INPUT_PORTS[0])?;
        Ok(single_output(OUTPUT_PORTS[0], self.forward(x)?))
    }

    fn describe(&self) -> String {
        format!(
            "Linear({} -> {}): x @ W[{}x{}] + b[{}]",
            self.in_features, self.out_features, self.in_features, self.out_features, self.out_features
        )
    }

    fn named_parameters(&self) -> Vec<(&'static str, &Tensor)> {
        vec![("weight", &self.weight), ("bias", &self.bias)]
    }

    fn parameter_mut(&mut self, name: &str) -> Option<&mut Tensor> {
        match name {
            "weight" => Some(&mut self.weight),
            "bias" => Some(&mut self.bias),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
