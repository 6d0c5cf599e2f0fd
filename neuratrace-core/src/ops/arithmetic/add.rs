// neuratrace-core/src/ops/arithmetic/add.rs

use crate::error::NeuraTraceError;
use crate::tensor::Tensor;

/// Performs element-wise addition of two tensors.
///
/// Supported pairings:
/// - identical shapes: plain element-wise sum;
/// - `a` of shape `[m, n]` with `b` of shape `[n]` or `[1, n]`: `b` is broadcast across
///   every row of `a`.
///
/// # Errors
/// Returns `NeuraTraceError::BroadcastError` for any other pairing.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, NeuraTraceError> {
    let a_shape = a.shape();
    let b_shape = b.shape();

    if a_shape == b_shape {
        let result_data: Vec<f32> = a
            .data()
            .iter()
            .zip(b.data().iter())
            .map(|(&x, &y)| x + y)
            .collect();
        return Ok(Tensor::from_parts(result_data, a_shape.to_vec()));
    }

    let row_broadcast = match (a_shape, b_shape) {
        (&[_, n], &[bn]) => n == bn,
        (&[_, n], &[1, bn]) => n == bn,
        _ => false,
    };
    if !row_broadcast {
        return Err(NeuraTraceError::BroadcastError {
            shape1: a_shape.to_vec(),
            shape2: b_shape.to_vec(),
        });
    }

    let n = a_shape[1];
    let row = b.data();
    let result_data: Vec<f32> = a
        .data()
        .chunks(n)
        .flat_map(|a_row| a_row.iter().zip(row.iter()).map(|(&x, &y)| x + y))
        .collect();
    Ok(Tensor::from_parts(result_data, a_shape.to_vec()))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
