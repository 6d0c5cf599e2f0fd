// examples/trace_mlp.rs
//!
//! Builds a small MLP (3 -> 4 -> 2, ReLU hidden, Softmax output), runs it once and
//! prints the recorded trace step by step.

use neuratrace_core::model::{build_mlp, MlpConfig};
use neuratrace_core::{Executor, NeuraTraceError, Tensor};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NeuraTraceError> {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = build_mlp(&MlpConfig::new(vec![3, 4, 2]), &mut rng)?;
    println!("Execution order: {:?}", graph.topological_ids()?);

    let input = Tensor::new(vec![0.5, -1.0, 2.0], vec![1, 3])?;
    let trace = Executor::new().run(&graph, &input)?;

    for step in trace.steps() {
        println!("--- step {} : {} ({})", step.index(), step.op_id(), step.op_type());
        println!("    {}", step.description());
        for (name, tensor) in step.inputs() {
            println!("    in  {} = {}", name, tensor);
        }
        for (name, tensor) in step.parameters() {
            println!("    par {} = {}", name, tensor);
        }
        for (name, tensor) in step.outputs() {
            println!("    out {} = {}", name, tensor);
        }
    }

    if let Some(output) = trace.output() {
        println!("Final output: {}", output);
    }
    Ok(())
}
