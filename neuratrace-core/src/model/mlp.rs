use crate::error::NeuraTraceError;
use crate::graph::Graph;
use crate::nn::{Activation, ActivationOp, Linear, Operation};
use log::debug;
use rand::Rng;

/// Shape of a multi-layer perceptron.
///
/// `layer_sizes` lists the width of every layer, input first: `[3, 4, 2]` describes
/// `Linear(3 -> 4)` followed by `Linear(4 -> 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub layer_sizes: Vec<usize>,
    /// Activation placed after every hidden Linear layer.
    pub hidden_activation: Activation,
    /// Activation placed after the last Linear layer, if any.
    pub output_activation: Option<Activation>,
}

/// ReLU hidden activations and a Softmax output. The layer sizes are left empty and
/// must be filled in before building.
impl Default for MlpConfig {
    fn default() -> Self {
        MlpConfig {
            layer_sizes: Vec::new(),
            hidden_activation: Activation::ReLU,
            output_activation: Some(Activation::Softmax),
        }
    }
}

impl MlpConfig {
    /// Default activations with the given layer sizes.
    pub fn new(layer_sizes: Vec<usize>) -> Self {
        MlpConfig {
            layer_sizes,
            ..MlpConfig::default()
        }
    }

    pub fn with_hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn with_output_activation(mut self, activation: Option<Activation>) -> Self {
        self.output_activation = activation;
        self
    }
}

fn activation_id(activation: Activation, layer: usize) -> String {
    let prefix = match activation {
        Activation::ReLU => "relu",
        Activation::Sigmoid => "sigmoid",
        Activation::Tanh => "tanh",
        Activation::Softmax => "softmax",
    };
    format!("{}{}", prefix, layer)
}

/// Assembles an MLP as a sequential graph.
///
/// Node ids are `linear{i}` for the i-th Linear layer and e.g. `relu{i}` / `softmax{i}`
/// for the activation that follows it. Parameters are drawn from `rng` in layer order.
///
/// # Errors
/// Returns `NeuraTraceError::InvalidShape` if fewer than two layer sizes are given or a
/// size is zero.
pub fn build_mlp<R: Rng + ?Sized>(config: &MlpConfig, rng: &mut R) -> Result<Graph, NeuraTraceError> {
    let sizes = &config.layer_sizes;
    if sizes.len() < 2 || sizes.iter().any(|&s| s == 0) {
        return Err(NeuraTraceError::InvalidShape {
            shape: sizes.clone(),
        });
    }

    let layer_count = sizes.len() - 1;
    let mut ops: Vec<(String, Box<dyn Operation>)> = Vec::with_capacity(layer_count * 2);
    for (layer, pair) in sizes.windows(2).enumerate() {
        ops.push((format!("linear{}", layer), Box::new(Linear::new(pair[0], pair[1], rng)?)));
        let activation = if layer + 1 < layer_count {
            Some(config.hidden_activation)
        } else {
            config.output_activation
        };
        if let Some(activation) = activation {
            ops.push((activation_id(activation, layer), Box::new(ActivationOp::new(activation))));
        }
    }

    debug!("build_mlp: {:?} -> {} operations", sizes, ops.len());
    Graph::sequential(ops)
}
