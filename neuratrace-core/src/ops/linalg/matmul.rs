// Linear algebra: matrix multiplication.

use crate::error::NeuraTraceError;
use crate::tensor::Tensor;

/// Performs matrix multiplication C = A @ B.
/// Supports only 2D tensors (matrices): A: [M, K], B: [K, N] -> C: [M, N].
///
/// # Errors
/// - `NeuraTraceError::RankMismatch` if either operand is not rank 2.
/// - `NeuraTraceError::ShapeMismatch` if the inner dimensions differ.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NeuraTraceError> {
    let a_shape = a.shape();
    let b_shape = b.shape();

    for shape in [a_shape, b_shape] {
        if shape.len() != 2 {
            return Err(NeuraTraceError::RankMismatch {
                expected: 2,
                actual: shape.len(),
                operation: "matmul".to_string(),
            });
        }
    }
    if a_shape[1] != b_shape[0] {
        return Err(NeuraTraceError::ShapeMismatch {
            expected: vec![a_shape[1], b_shape[1]],
            actual: b_shape.to_vec(),
            operation: "matmul (inner dim)".to_string(),
        });
    }

    let m = a_shape[0];
    let k = a_shape[1];
    let n = b_shape[1];

    let a_data = a.data();
    let b_data = b.data();
    let mut output_data = vec![0.0f32; m * n];

    for i in 0..m {
        for j in 0..n {
            let mut sum = 0.0f32;
            for p in 0..k {
                sum += a_data[i * k + p] * b_data[p * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }

    Ok(Tensor::from_parts(output_data, vec![m, n]))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
