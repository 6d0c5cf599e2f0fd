use crate::error::NeuraTraceError;
use crate::tensor::Tensor;

pub(crate) fn check_reshape(shape: &[usize], new_shape: &[usize]) -> Result<(), NeuraTraceError> {
    let numel: usize = shape.iter().product();
    let new_numel: usize = new_shape.iter().product();
    if numel != new_numel || new_shape.iter().any(|&d| d == 0) {
        return Err(NeuraTraceError::ShapeMismatch {
            expected: shape.to_vec(),
            actual: new_shape.to_vec(),
            operation: "reshape".to_string(),
        });
    }
    Ok(())
}

/// A read-only, non-owning view of a tensor's storage under a different shape.
///
/// Produced by [`Tensor::reshape`]. The view aliases the source storage, so it is tied to
/// the source's lifetime and exposes no mutable access. Trace snapshots are always owned
/// [`Tensor`]s, which keeps any recorded value from sharing storage with live state.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorView<'a> {
    shape: Vec<usize>,
    data: &'a [f32],
}

impl<'a> TensorView<'a> {
    pub(crate) fn new(data: &'a [f32], new_shape: &[usize]) -> Result<Self, NeuraTraceError> {
        check_reshape(&[data.len()], new_shape)?;
        Ok(TensorView {
            shape: new_shape.to_vec(),
            data,
        })
    }

    /// Returns the shape of the view.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the aliased flat data.
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Reshapes the view again, still aliasing the original storage.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<TensorView<'a>, NeuraTraceError> {
        TensorView::new(self.data, new_shape)
    }

    /// Copies the viewed data into a new owned tensor.
    pub fn to_tensor(&self) -> Tensor {
        Tensor::from_parts(self.data.to_vec(), self.shape.clone())
    }

    /// Returns `true` if this view aliases the storage of `tensor`.
    pub fn shares_storage_with(&self, tensor: &Tensor) -> bool {
        std::ptr::eq(self.data.as_ptr(), tensor.data.as_ptr())
    }
}
