//! # Operation Graph
//!
//! A [`Graph`] owns uniquely identified operations ([`OpNode`]) and the port-to-port wiring
//! between them. Its execution order is derived with Kahn's algorithm and cached until the
//! next structural mutation (`add_op` or `connect`).

use crate::error::NeuraTraceError;
use crate::nn::Operation;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

mod node;
mod port;
mod topo;

pub use node::OpNode;
pub use port::{PortRef, GRAPH_INPUT_ID, GRAPH_INPUT_PORT};

/// Directed acyclic graph of operations.
///
/// Nodes keep their insertion order, which also serves as the tie-break of the scheduler.
/// The cached order lives in a `OnceLock`, so a fully assembled graph is `Sync` and can be
/// executed from several threads at once.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<OpNode>,
    index: HashMap<String, usize>,
    order: OnceLock<Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Builds a chain: the first operation's `input` port reads the graph input and every
    /// following operation's `input` port reads the previous operation's `output` port.
    ///
    /// Equivalent to the corresponding sequence of [`Graph::add_op`] and [`Graph::connect`] calls.
    pub fn sequential<I, S>(ops: I) -> Result<Self, NeuraTraceError>
    where
        I: IntoIterator<Item = (S, Box<dyn Operation>)>,
        S: Into<String>,
    {
        let mut graph = Graph::new();
        let mut previous: Option<String> = None;
        for (id, op) in ops {
            let id = id.into();
            graph.add_boxed_op(id.clone(), None, op)?;
            match previous.as_deref() {
                None => graph.connect(GRAPH_INPUT_ID, GRAPH_INPUT_PORT, &id, "input")?,
                Some(prev) => graph.connect(prev, "output", &id, "input")?,
            }
            previous = Some(id);
        }
        Ok(graph)
    }

    /// Registers an operation under `id`; its display name defaults to the id.
    ///
    /// # Errors
    /// - `NeuraTraceError::DuplicateOpId` if `id` is already registered.
    /// - `NeuraTraceError::ReservedOpId` if `id` is the graph-input id.
    pub fn add_op<O>(&mut self, id: impl Into<String>, op: O) -> Result<&mut OpNode, NeuraTraceError>
    where
        O: Operation + 'static,
    {
        self.add_boxed_op(id.into(), None, Box::new(op))
    }

    /// Same as [`Graph::add_op`] with an explicit display name.
    pub fn add_named_op<O>(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        op: O,
    ) -> Result<&mut OpNode, NeuraTraceError>
    where
        O: Operation + 'static,
    {
        self.add_boxed_op(id.into(), Some(name.into()), Box::new(op))
    }

    /// Registers an already boxed operation.
    pub fn add_boxed_op(
        &mut self,
        id: String,
        name: Option<String>,
        op: Box<dyn Operation>,
    ) -> Result<&mut OpNode, NeuraTraceError> {
        if id == GRAPH_INPUT_ID {
            return Err(NeuraTraceError::ReservedOpId(id));
        }
        if self.index.contains_key(&id) {
            return Err(NeuraTraceError::DuplicateOpId(id));
        }
        debug!("Graph: add_op '{}' ({})", id, op.op_type());
        let position = self.nodes.len();
        let name = name.unwrap_or_else(|| id.clone());
        self.index.insert(id.clone(), position);
        self.nodes.push(OpNode::new(id, name, op));
        self.invalidate_order();
        Ok(&mut self.nodes[position])
    }

    /// Wires `source_op.source_port` into `target_op.target_port`, replacing any previous
    /// producer of that input port.
    ///
    /// The source is not required to be registered: [`GRAPH_INPUT_ID`] denotes the external
    /// input, and an unknown producer surfaces as a missing dependency at execution time.
    ///
    /// # Errors
    /// - `NeuraTraceError::UnknownOp` if the target is not registered.
    /// - `NeuraTraceError::UnknownPort` if the target operation has no such input port.
    pub fn connect(
        &mut self,
        source_op: &str,
        source_port: &str,
        target_op: &str,
        target_port: &str,
    ) -> Result<(), NeuraTraceError> {
        let position = *self
            .index
            .get(target_op)
            .ok_or_else(|| NeuraTraceError::UnknownOp(target_op.to_string()))?;
        let node = &mut self.nodes[position];
        if !node.op().input_names().iter().any(|&p| p == target_port) {
            return Err(NeuraTraceError::UnknownPort {
                op_id: target_op.to_string(),
                port: target_port.to_string(),
            });
        }
        debug!(
            "Graph: connect {}.{} -> {}.{}",
            source_op, source_port, target_op, target_port
        );
        node.set_input(target_port.to_string(), PortRef::new(source_op, source_port));
        self.invalidate_order();
        Ok(())
    }

    fn invalidate_order(&mut self) {
        self.order = OnceLock::new();
    }

    fn order_indices(&self) -> Result<&[usize], NeuraTraceError> {
        if let Some(order) = self.order.get() {
            return Ok(order);
        }
        let order = topo::topological_sort(&self.nodes, &self.index)?;
        debug!("Graph: computed execution order for {} operations", order.len());
        Ok(self.order.get_or_init(|| order))
    }

    /// Returns the operations in execution order.
    ///
    /// Computed with Kahn's algorithm (insertion-order FIFO tie-break) and cached until the
    /// next `add_op`/`connect`.
    ///
    /// # Errors
    /// Returns `NeuraTraceError::CycleDetected` if the graph is not acyclic.
    pub fn topological_order(&self) -> Result<Vec<&OpNode>, NeuraTraceError> {
        Ok(self
            .order_indices()?
            .iter()
            .map(|&i| &self.nodes[i])
            .collect())
    }

    /// Returns the ids of the operations in execution order.
    pub fn topological_ids(&self) -> Result<Vec<&str>, NeuraTraceError> {
        Ok(self.topological_order()?.into_iter().map(OpNode::id).collect())
    }

    /// Returns `true` if an execution order is currently cached.
    pub fn is_order_cached(&self) -> bool {
        self.order.get().is_some()
    }

    /// All operations in insertion order.
    pub fn nodes(&self) -> &[OpNode] {
        &self.nodes
    }

    pub fn node(&self, id: &str) -> Option<&OpNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Mutable access to a node (renaming, parameter values). Wiring cannot be changed
    /// through this handle, so the cached order stays valid.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut OpNode> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.nodes[i]),
            None => None,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Ids of the registered operations reading an output of `id`, in insertion order.
    pub fn consumers(&self, id: &str) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|node| node.input_ports().values().any(|p| p.op_id() == id))
            .map(OpNode::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
