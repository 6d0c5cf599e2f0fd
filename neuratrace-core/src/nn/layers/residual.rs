use crate::error::NeuraTraceError;
use crate::nn::layers::OUTPUT_PORTS;
use crate::nn::operation::{input, single_output, OpType, Operation, TensorMap};
use crate::ops::arithmetic::add_op;

const RESIDUAL_PORTS: &[&str] = &["a", "b"];

/// Residual (skip) connection: `output = a + b`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResidualAdd;

impl ResidualAdd {
    pub fn new() -> Self {
        ResidualAdd
    }
}

impl Operation for ResidualAdd {
    fn op_type(&self) -> OpType {
        OpType::Add
    }

    fn input_names(&self) -> &'static [&'static str] {
        RESIDUAL_PORTS
    }

    fn output_names(&self) -> &'static [&'static str] {
        OUTPUT_PORTS
    }

    fn compute(&self, inputs: &TensorMap) -> Result<TensorMap, NeuraTraceError> {
        let a = input(inputs, OpType::Add, RESIDUAL_PORTS[0])?;
        let b = input(inputs, OpType::Add, RESIDUAL_PORTS[1])?;
        Ok(single_output(OUTPUT_PORTS[0], add_op(a, b)?))
    }

    fn describe(&self) -> String {
        "Add: a + b".to_string()
    }
}
