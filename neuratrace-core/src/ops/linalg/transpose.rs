use crate::error::NeuraTraceError;
use crate::tensor::Tensor;

/// Returns a new tensor holding the transpose of a rank-2 tensor.
///
/// The result is contiguous: data is copied into `[cols, rows]` order.
pub fn transpose_2d_op(a: &Tensor) -> Result<Tensor, NeuraTraceError> {
    let (rows, cols) = match a.shape() {
        &[rows, cols] => (rows, cols),
        shape => {
            return Err(NeuraTraceError::RankMismatch {
                expected: 2,
                actual: shape.len(),
                operation: "transpose_2d".to_string(),
            })
        }
    };
    let data = a.data();
    let mut output_data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            output_data.push(data[i * cols + j]);
        }
    }
    Ok(Tensor::from_parts(output_data, vec![cols, rows]))
}
