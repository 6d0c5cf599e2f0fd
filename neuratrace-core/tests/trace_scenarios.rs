use approx::assert_abs_diff_eq;
use neuratrace_core::graph::{GRAPH_INPUT_ID, GRAPH_INPUT_PORT};
use neuratrace_core::model::{build_mlp, MlpConfig};
use neuratrace_core::nn::OpType;
use neuratrace_core::utils::testing::check_tensor_near;
use neuratrace_core::{Executor, Graph, NeuraTraceError, Tensor};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{create_test_tensor, linear_from, two_layer_chain};

#[test]
fn scenario_single_linear() -> Result<(), NeuraTraceError> {
    let mut graph = Graph::new();
    graph.add_op("linear", linear_from(vec![0.1, 0.3, 0.2, 0.4], vec![2, 2], vec![0.5, 0.6]))?;
    graph.connect(GRAPH_INPUT_ID, GRAPH_INPUT_PORT, "linear", "input")?;

    let trace = Executor::new().run(&graph, &create_test_tensor(vec![1.0, 2.0], vec![1, 2]))?;
    check_tensor_near(trace.output().unwrap(), &[1, 2], &[1.0, 1.7], 1e-6);
    Ok(())
}

#[test]
fn scenario_linear_relu_linear() -> Result<(), NeuraTraceError> {
    let graph = two_layer_chain();
    let trace = Executor::new().run(&graph, &create_test_tensor(vec![1.0, 2.0], vec![1, 2]))?;

    let outputs: Vec<&Tensor> = trace.steps().iter().map(|s| &s.outputs()["output"]).collect();
    check_tensor_near(outputs[0], &[1, 2], &[0.5, 1.1], 1e-6);
    check_tensor_near(outputs[1], &[1, 2], &[0.5, 1.1], 1e-6);
    check_tensor_near(outputs[2], &[1, 1], &[1.01], 1e-6);

    let types: Vec<OpType> = trace.steps().iter().map(|s| s.op_type()).collect();
    assert_eq!(types, vec![OpType::Linear, OpType::ReLU, OpType::Linear]);
    let indices: Vec<usize> = trace.steps().iter().map(|s| s.index()).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn scenario_mlp_3_4_2() -> Result<(), NeuraTraceError> {
    let mut rng = StdRng::seed_from_u64(2024);
    let graph = build_mlp(&MlpConfig::new(vec![3, 4, 2]), &mut rng)?;
    assert_eq!(graph.len(), 4);

    let trace = Executor::new().run(&graph, &create_test_tensor(vec![1.0, -2.0, 0.5], vec![1, 3]))?;
    assert_eq!(trace.len(), 4);
    let types: Vec<OpType> = trace.steps().iter().map(|s| s.op_type()).collect();
    assert_eq!(
        types,
        vec![OpType::Linear, OpType::ReLU, OpType::Linear, OpType::Softmax]
    );
    let output = trace.output().unwrap();
    assert_abs_diff_eq!(output.data().iter().sum::<f32>(), 1.0, epsilon = 1e-4);
    assert!(output.data().iter().all(|&p| (0.0..=1.0).contains(&p)));
    Ok(())
}

#[test]
fn repeated_runs_are_bit_identical() -> Result<(), NeuraTraceError> {
    let graph = build_mlp(&MlpConfig::new(vec![3, 8, 8, 2]), &mut StdRng::seed_from_u64(3))?;
    let input = create_test_tensor(vec![0.1, 0.2, 0.3, -0.4, 0.5, -0.6], vec![2, 3]);
    let executor = Executor::new();
    let first = executor.run(&graph, &input)?;
    let second = executor.run(&graph, &input)?;

    assert_eq!(first.len(), second.len());
    assert_eq!(first.op_ids(), second.op_ids());
    let bits = |t: &Tensor| t.data().iter().map(|v| v.to_bits()).collect::<Vec<u32>>();
    assert_eq!(bits(first.output().unwrap()), bits(second.output().unwrap()));
    Ok(())
}

#[test]
fn trace_is_isolated_from_live_state() -> Result<(), NeuraTraceError> {
    let mut graph = two_layer_chain();
    let input = create_test_tensor(vec![1.0, 2.0], vec![1, 2]);
    let trace = Executor::new().run(&graph, &input)?;

    // Mutating a tensor taken from a step leaves the step intact.
    let mut hidden = trace.steps()[1].outputs()["output"].clone();
    hidden.data_mut().iter_mut().for_each(|v| *v = 0.0);
    check_tensor_near(&trace.steps()[1].outputs()["output"], &[1, 2], &[0.5, 1.1], 1e-6);

    // Mutating a live parameter leaves the recorded snapshot intact.
    if let Some(bias) = graph.node_mut("fc2").and_then(|n| n.parameter_mut("bias")) {
        bias.data_mut()[0] = 10.0;
    }
    check_tensor_near(&trace.steps()[2].parameters()["bias"], &[1], &[0.1], 0.0);
    assert_eq!(
        graph.node("fc2").unwrap().op().named_parameters()[1].1.data(),
        &[10.0]
    );
    Ok(())
}

#[test]
fn reshape_view_cannot_leak_into_trace() -> Result<(), NeuraTraceError> {
    let graph = two_layer_chain();
    let flat = create_test_tensor(vec![1.0, 2.0], vec![2]);
    let view = flat.reshape(&[1, 2])?;
    assert!(view.shares_storage_with(&flat));

    // Only owned tensors can be fed to the executor.
    let trace = Executor::new().run(&graph, &view.to_tensor())?;
    assert_eq!(trace.input().shape(), &[1, 2]);
    assert!(!view.shares_storage_with(trace.input()));
    Ok(())
}
