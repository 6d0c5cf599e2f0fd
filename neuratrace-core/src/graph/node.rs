use crate::graph::PortRef;
use crate::nn::{OpType, Operation};
use crate::tensor::Tensor;
use std::collections::BTreeMap;

/// A registered operation together with its identity and input wiring.
#[derive(Debug)]
pub struct OpNode {
    id: String,
    name: String,
    op: Box<dyn Operation>,
    inputs: BTreeMap<String, PortRef>,
}

impl OpNode {
    pub(crate) fn new(id: String, name: String, op: Box<dyn Operation>) -> Self {
        OpNode {
            id,
            name,
            op,
            inputs: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label; defaults to the id.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn op(&self) -> &dyn Operation {
        self.op.as_ref()
    }

    pub fn op_type(&self) -> OpType {
        self.op.op_type()
    }

    /// Input port name -> producer reference.
    pub fn input_ports(&self) -> &BTreeMap<String, PortRef> {
        &self.inputs
    }

    /// Mutable access to one of the operation's parameters.
    ///
    /// Changing parameter values is not a structural mutation and leaves the cached
    /// execution order intact.
    pub fn parameter_mut(&mut self, name: &str) -> Option<&mut Tensor> {
        self.op.parameter_mut(name)
    }

    pub(crate) fn set_input(&mut self, port: String, producer: PortRef) {
        self.inputs.insert(port, producer);
    }
}
