use crate::graph::PortRef;
use crate::tensor::Tensor;
use log::trace;
use std::collections::HashMap;

/// Live values of one execution, keyed by producer port.
///
/// Each run owns its own store; nothing in it is shared with the graph or the trace.
#[derive(Debug, Default)]
pub struct ValueStore {
    values: HashMap<PortRef, Tensor>,
}

impl ValueStore {
    pub fn new() -> Self {
        ValueStore::default()
    }

    /// Creates a store holding a copy of `input` under the graph-input reference.
    pub fn with_input(input: &Tensor) -> Self {
        let mut store = ValueStore::new();
        store.insert(PortRef::graph_input(), input.clone());
        store
    }

    pub fn insert(&mut self, port: PortRef, value: Tensor) {
        trace!("ValueStore: store {} {:?}", port, value.shape());
        self.values.insert(port, value);
    }

    pub fn get(&self, port: &PortRef) -> Option<&Tensor> {
        self.values.get(port)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
