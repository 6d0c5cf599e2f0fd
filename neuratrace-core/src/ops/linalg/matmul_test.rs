use crate::error::NeuraTraceError;
use crate::ops::linalg::matmul_op;
use crate::tensor::Tensor;
use crate::utils::testing::check_tensor_near;

#[test]
fn test_matmul_forward() {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let b = Tensor::new(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2]).unwrap();
    let output = matmul_op(&a, &b).unwrap();
    check_tensor_near(&output, &[2, 2], &[19.0, 22.0, 43.0, 50.0], 1e-6);
}

#[test]
fn test_matmul_forward_non_square() {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    let b = Tensor::new(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], vec![3, 2]).unwrap();
    let output = matmul_op(&a, &b).unwrap();
    check_tensor_near(&output, &[2, 2], &[58.0, 64.0, 139.0, 154.0], 1e-6);
}

#[test]
fn test_matmul_row_vector() {
    let x = Tensor::new(vec![1.0, 2.0], vec![1, 2]).unwrap();
    let w = Tensor::new(vec![0.1, 0.3, 0.2, 0.4], vec![2, 2]).unwrap();
    let output = x.matmul(&w).unwrap();
    check_tensor_near(&output, &[1, 2], &[0.5, 1.1], 1e-6);
}

#[test]
fn test_matmul_shape_mismatch_inner() {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let b = Tensor::new(vec![5.0, 6.0, 7.0], vec![3, 1]).unwrap();
    match matmul_op(&a, &b).err().unwrap() {
        NeuraTraceError::ShapeMismatch { operation, .. } => {
            assert_eq!(operation, "matmul (inner dim)");
        }
        other => panic!("Expected ShapeMismatch error for matmul inner dimensions, got {:?}", other),
    }
}

#[test]
fn test_matmul_shape_mismatch_rank() {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
    let b = Tensor::new(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2, 1]).unwrap();
    let err = matmul_op(&a, &b).unwrap_err();
    assert!(err.is_shape_error());
    assert_eq!(
        err,
        NeuraTraceError::RankMismatch {
            expected: 2,
            actual: 3,
            operation: "matmul".to_string()
        }
    );
}
