#[cfg(test)]
mod tests {
    use crate::error::NeuraTraceError;
    use crate::nn::operation::{OpType, Operation, TensorMap};
    use crate::nn::Linear;
    use crate::tensor::{from_vec, Tensor};
    use crate::utils::testing::check_tensor_near;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario_linear(bias: Vec<f32>) -> Result<Linear, NeuraTraceError> {
        let weight = from_vec(vec![0.1, 0.3, 0.2, 0.4], vec![2, 2])?;
        Linear::from_parameters(weight, from_vec(bias, vec![2])?)
    }

    #[test]
    fn test_linear_creation() -> Result<(), NeuraTraceError> {
        let mut rng = StdRng::seed_from_u64(0);
        let linear = Linear::new(10, 5, &mut rng)?;
        assert_eq!(linear.weight().shape(), &[10, 5]);
        assert_eq!(linear.bias().shape(), &[5]);
        assert_eq!(linear.in_features(), 10);
        assert_eq!(linear.out_features(), 5);
        assert!(linear.bias().data().iter().all(|&b| b == 0.0));
        assert_eq!(linear.op_type(), OpType::Linear);
        assert_eq!(linear.input_names(), &["input"]);
        assert_eq!(linear.output_names(), &["output"]);
        Ok(())
    }

    #[test]
    fn test_linear_same_seed_same_parameters() -> Result<(), NeuraTraceError> {
        let a = Linear::new(3, 4, &mut StdRng::seed_from_u64(11))?;
        let b = Linear::new(3, 4, &mut StdRng::seed_from_u64(11))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn test_linear_forward_scenario() -> Result<(), NeuraTraceError> {
        let linear = scenario_linear(vec![0.5, 0.6])?;
        let x = Tensor::new(vec![1.0, 2.0], vec![1, 2])?;
        let y = linear.forward(&x)?;
        check_tensor_near(&y, &[1, 2], &[1.0, 1.7], 1e-6);
        Ok(())
    }

    #[test]
    fn test_linear_forward_rank1_input() -> Result<(), NeuraTraceError> {
        let linear = scenario_linear(vec![0.5, 0.6])?;
        let x = Tensor::new(vec![1.0, 2.0], vec![2])?;
        let y = linear.forward(&x)?;
        check_tensor_near(&y, &[2], &[1.0, 1.7], 1e-6);
        Ok(())
    }

    #[test]
    fn test_linear_forward_batch() -> Result<(), NeuraTraceError> {
        let linear = scenario_linear(vec![0.0, 0.0])?;
        let x = Tensor::new(vec![1.0, 2.0, -1.0, 0.0], vec![2, 2])?;
        let y = linear.forward(&x)?;
        check_tensor_near(&y, &[2, 2], &[0.5, 1.1, -0.1, -0.3], 1e-6);
        Ok(())
    }

    #[test]
    fn test_linear_compute_missing_input() -> Result<(), NeuraTraceError> {
        let linear = scenario_linear(vec![0.0, 0.0])?;
        let err = linear.compute(&TensorMap::new()).unwrap_err();
        assert_eq!(
            err,
            NeuraTraceError::MissingInput {
                operation: "Linear".to_string(),
                port: "input".to_string()
            }
        );
        Ok(())
    }

    #[test]
    fn test_linear_from_parameters_rejects_bad_shapes() -> Result<(), NeuraTraceError> {
        let w = from_vec(vec![1.0; 6], vec![2, 3])?;
        let bad_bias = from_vec(vec![0.0; 2], vec![2])?;
        assert!(matches!(
            Linear::from_parameters(w, bad_bias),
            Err(NeuraTraceError::ShapeMismatch { .. })
        ));
        let w_rank1 = from_vec(vec![1.0; 3], vec![3])?;
        assert!(matches!(
            Linear::from_parameters(w_rank1, from_vec(vec![0.0], vec![1])?),
            Err(NeuraTraceError::RankMismatch { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_linear_parameters_and_mutation() -> Result<(), NeuraTraceError> {
        let mut linear = scenario_linear(vec![0.5, 0.6])?;
        let names: Vec<&str> = linear.named_parameters().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["weight", "bias"]);
        linear.parameter_mut("bias").unwrap().data_mut()[0] = 1.5;
        assert_eq!(linear.bias().data(), &[1.5, 0.6]);
        assert!(linear.parameter_mut("gamma").is_none());
        Ok(())
    }

    #[test]
    fn test_linear_describe() -> Result<(), NeuraTraceError> {
        let linear = Linear::new(3, 4, &mut StdRng::seed_from_u64(3))?;
        assert!(linear.describe().starts_with("Linear(3 -> 4)"));
        Ok(())
    }
}
