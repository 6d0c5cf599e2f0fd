// Kahn's algorithm over the registered nodes of a graph.

use crate::error::NeuraTraceError;
use crate::graph::OpNode;
use std::collections::{HashMap, VecDeque};

/// Builds, for every node index, the indices of the nodes consuming one of its outputs.
///
/// Consumers are listed in graph insertion order, once per wired port. Edges whose producer
/// is not a registered node (including the external input) are ignored.
pub(crate) fn consumer_lists(nodes: &[OpNode], index: &HashMap<String, usize>) -> Vec<Vec<usize>> {
    let mut consumers = vec![Vec::new(); nodes.len()];
    for (target, node) in nodes.iter().enumerate() {
        for producer in node.input_ports().values() {
            if let Some(&source) = index.get(producer.op_id()) {
                consumers[source].push(target);
            }
        }
    }
    consumers
}

/// Computes a topological order of `nodes` as indices into the slice.
///
/// Zero in-degree nodes are seeded in insertion order and processed FIFO, so the result
/// is fully determined by insertion order and wiring.
///
/// # Errors
/// Returns `NeuraTraceError::CycleDetected` when fewer nodes than registered can be scheduled.
pub(crate) fn topological_sort(
    nodes: &[OpNode],
    index: &HashMap<String, usize>,
) -> Result<Vec<usize>, NeuraTraceError> {
    let consumers = consumer_lists(nodes, index);
    let mut in_degree = vec![0usize; nodes.len()];
    for targets in &consumers {
        for &target in targets {
            in_degree[target] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..nodes.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut order = Vec::with_capacity(nodes.len());
    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in &consumers[current] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if order.len() < nodes.len() {
        log::warn!(
            "Graph: cycle detected, scheduled {} of {} operations",
            order.len(),
            nodes.len()
        );
        return Err(NeuraTraceError::CycleDetected {
            scheduled: order.len(),
            total: nodes.len(),
        });
    }
    Ok(order)
}
