use neuratrace_core::graph::Graph;
use neuratrace_core::nn::{ActivationOp, Linear, Operation};
use neuratrace_core::tensor::Tensor;

// Helpers shared by the integration test crates.
// allow(dead_code) because each test crate only uses part of them.
#[allow(dead_code)]
pub fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn linear_from(weight: Vec<f32>, shape: Vec<usize>, bias: Vec<f32>) -> Linear {
    let out = shape[1];
    Linear::from_parameters(create_test_tensor(weight, shape), create_test_tensor(bias, vec![out]))
        .expect("Invalid Linear parameters")
}

/// Linear(2->2) -> ReLU -> Linear(2->1) with fixed parameters.
#[allow(dead_code)]
pub fn two_layer_chain() -> Graph {
    let ops: Vec<(&str, Box<dyn Operation>)> = vec![
        (
            "fc1",
            Box::new(linear_from(vec![0.1, 0.3, 0.2, 0.4], vec![2, 2], vec![0.0, 0.0])) as Box<dyn Operation>,
        ),
        ("relu", Box::new(ActivationOp::relu()) as Box<dyn Operation>),
        (
            "fc2",
            Box::new(linear_from(vec![0.5, 0.6], vec![2, 1], vec![0.1])) as Box<dyn Operation>,
        ),
    ];
    Graph::sequential(ops).expect("Failed to assemble chain")
}
