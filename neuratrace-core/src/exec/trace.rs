use crate::nn::{OpType, TensorMap};
use crate::tensor::Tensor;
use std::fmt;

/// Immutable record of one executed operation.
///
/// All tensors are copies taken when the step was recorded: they share no storage with
/// the graph, its parameters or the executor's value store.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub(crate) index: usize,
    pub(crate) op_id: String,
    pub(crate) op_name: String,
    pub(crate) op_type: OpType,
    pub(crate) description: String,
    pub(crate) inputs: TensorMap,
    pub(crate) outputs: TensorMap,
    pub(crate) parameters: TensorMap,
}

impl TraceStep {
    /// Position of the step in execution order, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn op_id(&self) -> &str {
        &self.op_id
    }

    pub fn op_name(&self) -> &str {
        &self.op_name
    }

    pub fn op_type(&self) -> OpType {
        self.op_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Resolved input tensors, keyed by input port name.
    pub fn inputs(&self) -> &TensorMap {
        &self.inputs
    }

    /// Produced tensors, keyed by output port name.
    pub fn outputs(&self) -> &TensorMap {
        &self.outputs
    }

    /// Snapshot of the operation's parameters at the time of execution.
    pub fn parameters(&self) -> &TensorMap {
        &self.parameters
    }
}

/// The ordered record of one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub(crate) steps: Vec<TraceStep>,
    pub(crate) input: Tensor,
    pub(crate) output: Option<Tensor>,
}

impl Trace {
    /// Steps ordered by index.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    /// The step recorded for operation `op_id`, if it ran.
    pub fn find_step(&self, op_id: &str) -> Option<&TraceStep> {
        self.steps.iter().find(|step| step.op_id == op_id)
    }

    /// Operation ids in execution order.
    pub fn op_ids(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.op_id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Copy of the tensor the run was started with.
    pub fn input(&self) -> &Tensor {
        &self.input
    }

    /// Primary output of the last executed operation; `None` for an empty graph.
    pub fn output(&self) -> Option<&Tensor> {
        self.output.as_ref()
    }

    /// Consumes the trace and returns its steps.
    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input: {}", self.input)?;
        for step in &self.steps {
            writeln!(
                f,
                "#{} {} [{}] {}",
                step.index, step.op_id, step.op_type, step.description
            )?;
            for (port, tensor) in &step.outputs {
                writeln!(f, "    {} = {}", port, tensor)?;
            }
        }
        match &self.output {
            Some(output) => write!(f, "output: {}", output),
            None => write!(f, "output: <none>"),
        }
    }
}
