use crate::error::NeuraTraceError;
use crate::tensor::Tensor;

// Softmax of one row, stabilized by subtracting the row maximum before exponentiating.
fn softmax_row(row: &[f32], out: &mut Vec<f32>) {
    let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let start = out.len();
    let mut sum = 0.0f32;
    for &x in row {
        let e = (x - max).exp();
        sum += e;
        out.push(e);
    }
    for v in &mut out[start..] {
        *v /= sum;
    }
}

/// Computes the softmax of a tensor along its last axis.
///
/// - rank 1: the whole vector is normalized;
/// - rank 2: each row is normalized independently.
///
/// The per-row maximum is subtracted before exponentiating, so large inputs such as
/// `[1000, 1001, 1002]` do not overflow.
///
/// # Errors
/// Returns `NeuraTraceError::UnsupportedOperation` for any other rank.
pub fn softmax_op(input: &Tensor) -> Result<Tensor, NeuraTraceError> {
    let row_len = match input.shape() {
        &[n] => n,
        &[_, n] => n,
        shape => {
            return Err(NeuraTraceError::UnsupportedOperation(format!(
                "softmax supports rank 1 or 2 tensors, got rank {} (shape {:?})",
                shape.len(),
                shape
            )))
        }
    };
    let mut output_data = Vec::with_capacity(input.numel());
    for row in input.data().chunks(row_len) {
        softmax_row(row, &mut output_data);
    }
    Ok(Tensor::from_parts(output_data, input.shape().to_vec()))
}
