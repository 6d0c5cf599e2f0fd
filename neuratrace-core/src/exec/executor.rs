use crate::error::NeuraTraceError;
use crate::exec::{Trace, TraceStep, ValueStore};
use crate::graph::{Graph, OpNode, PortRef};
use crate::nn::TensorMap;
use crate::tensor::Tensor;
use log::debug;

/// Runs a graph once and records every intermediate value.
///
/// The executor is stateless: every call to [`Executor::run`] owns a fresh
/// [`ValueStore`], so the same graph may be run concurrently by reference.
#[derive(Debug, Default, Clone, Copy)]
pub struct Executor;

impl Executor {
    pub fn new() -> Self {
        Executor
    }

    /// Executes `graph` on `input` and returns the trace of the pass.
    ///
    /// Operations run in [`Graph::topological_order`]. Every recorded tensor (inputs,
    /// outputs and parameter snapshots) is a copy, so mutating the trace, the graph or the
    /// tensors handed out later never affects one another.
    ///
    /// # Errors
    /// - `NeuraTraceError::CycleDetected` if the graph has a cycle.
    /// - `NeuraTraceError::MissingDependency` if a declared input cannot be resolved, or if
    ///   the last operation did not produce its primary output.
    /// - Any error raised by an operation's `compute`.
    ///
    /// No trace is returned when a step fails.
    pub fn run(&self, graph: &Graph, input: &Tensor) -> Result<Trace, NeuraTraceError> {
        let order = graph.topological_order()?;
        debug!("Executor: run() called, {} operations", order.len());

        let mut store = ValueStore::with_input(input);
        let mut steps = Vec::with_capacity(order.len());

        for (index, node) in order.iter().enumerate() {
            let inputs = resolve_inputs(node, &store)?;
            let outputs = node.op().compute(&inputs)?;
            debug!(
                "Executor: step {} '{}' ({}) produced {} output(s)",
                index,
                node.id(),
                node.op_type(),
                outputs.len()
            );

            let parameters: TensorMap = node
                .op()
                .named_parameters()
                .into_iter()
                .map(|(name, tensor)| (name.to_string(), tensor.clone()))
                .collect();

            steps.push(TraceStep {
                index,
                op_id: node.id().to_string(),
                op_name: node.name().to_string(),
                op_type: node.op_type(),
                description: node.op().describe(),
                inputs,
                outputs: outputs.clone(),
                parameters,
            });

            for (port, tensor) in outputs {
                store.insert(PortRef::new(node.id(), port), tensor);
            }
        }

        let output = match order.last() {
            Some(last) => primary_output(last, &store)?,
            None => None,
        };

        Ok(Trace {
            steps,
            input: input.clone(),
            output,
        })
    }
}

// Copies the value bound to every declared input port of `node`.
fn resolve_inputs(node: &OpNode, store: &ValueStore) -> Result<TensorMap, NeuraTraceError> {
    let mut inputs = TensorMap::new();
    for &port in node.op().input_names() {
        let producer = node.input_ports().get(port);
        let value = producer.and_then(|p| store.get(p)).ok_or_else(|| {
            NeuraTraceError::MissingDependency {
                op_id: node.id().to_string(),
                port: port.to_string(),
                producer: producer.cloned(),
            }
        })?;
        inputs.insert(port.to_string(), value.clone());
    }
    Ok(inputs)
}

// Copies the primary output of the last executed operation.
fn primary_output(last: &OpNode, store: &ValueStore) -> Result<Option<Tensor>, NeuraTraceError> {
    let port = match last.op().output_names().first() {
        Some(&port) => port,
        None => return Ok(None),
    };
    let producer = PortRef::new(last.id(), port);
    match store.get(&producer) {
        Some(tensor) => Ok(Some(tensor.clone())),
        None => Err(NeuraTraceError::MissingDependency {
            op_id: last.id().to_string(),
            port: port.to_string(),
            producer: Some(producer),
        }),
    }
}

#[cfg(test)]
#[path = "executor_test.rs"]
mod tests;
