use crate::error::NeuraTraceError;
use crate::tensor::Tensor;
use std::collections::BTreeMap;
use std::fmt;

/// Named tensors keyed by port name, ordered by name.
pub type TensorMap = BTreeMap<String, Tensor>;

/// Closed set of operation kinds understood by the graph and its inspection tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    Linear,
    ReLU,
    Sigmoid,
    Tanh,
    Softmax,
    /// Residual/skip connection summing two inputs.
    Add,
}

impl OpType {
    /// Fixed tag used in traces and descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpType::Linear => "Linear",
            OpType::ReLU => "ReLU",
            OpType::Sigmoid => "Sigmoid",
            OpType::Tanh => "Tanh",
            OpType::Softmax => "Softmax",
            OpType::Add => "Add",
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The capability every graph operation provides.
///
/// An operation reads the tensors bound to its input ports plus its own parameters and
/// produces one tensor per output port. It holds no hidden state besides its parameters,
/// and `compute` must never modify an input tensor: it always allocates its outputs.
pub trait Operation: fmt::Debug + Send + Sync {
    /// The kind of this operation.
    fn op_type(&self) -> OpType;

    /// Names of the input ports, in declaration order.
    fn input_names(&self) -> &'static [&'static str];

    /// Names of the output ports, in declaration order. The first one is the primary output.
    fn output_names(&self) -> &'static [&'static str];

    /// Runs the operation on the tensors bound to its input ports.
    ///
    /// # Errors
    /// Returns `NeuraTraceError::MissingInput` if a declared input port is absent from
    /// `inputs`, or the error of the underlying tensor primitive.
    fn compute(&self, inputs: &TensorMap) -> Result<TensorMap, NeuraTraceError>;

    /// Human-readable one-line description.
    fn describe(&self) -> String;

    /// Returns the parameters owned by this operation along with their names.
    /// Operations without parameters return an empty vector.
    fn named_parameters(&self) -> Vec<(&'static str, &Tensor)> {
        Vec::new()
    }

    /// Mutable access to a named parameter.
    fn parameter_mut(&mut self, _name: &str) -> Option<&mut Tensor> {
        None
    }
}

/// Looks up a declared input port, failing with `MissingInput` when it is absent.
pub(crate) fn input<'a>(
    inputs: &'a TensorMap,
    op_type: OpType,
    port: &str,
) -> Result<&'a Tensor, NeuraTraceError> {
    inputs.get(port).ok_or_else(|| NeuraTraceError::MissingInput {
        operation: op_type.to_string(),
        port: port.to_string(),
    })
}

/// Wraps a single output tensor under the given port name.
pub(crate) fn single_output(port: &str, tensor: Tensor) -> TensorMap {
    let mut outputs = TensorMap::new();
    outputs.insert(port.to_string(), tensor);
    outputs
}
