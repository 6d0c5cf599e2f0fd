// src/tensor/mod.rs

use crate::error::NeuraTraceError;

pub mod create;
mod math_methods;
mod traits;
pub mod view;

// Re-export creation functions to make them public
pub use create::{from_vec, full, ones, rand_uniform, xavier_uniform, zeros};
pub use view::TensorView;

/// Represents an n-dimensional array of `f32` values (a tensor).
///
/// A `Tensor` owns its storage: the flat, row-major `data` vector always holds exactly
/// `shape.iter().product()` elements. Cloning a tensor is a deep copy, so two tensors
/// never share storage. The only way to observe the same storage under a different shape
/// is [`Tensor::reshape`], which returns a borrowed [`TensorView`].
///
/// Every arithmetic primitive (see the `ops` module) allocates a fresh result and never
/// modifies its inputs.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    pub(crate) shape: Vec<usize>,
    pub(crate) data: Vec<f32>,
}

/// Validates a shape against the number of elements supplied for it.
pub(crate) fn check_shape(shape: &[usize], data_len: usize) -> Result<(), NeuraTraceError> {
    if shape.iter().any(|&d| d == 0) {
        return Err(NeuraTraceError::InvalidShape {
            shape: shape.to_vec(),
        });
    }
    let numel: usize = shape.iter().product();
    if numel != data_len {
        return Err(NeuraTraceError::TensorCreationError {
            data_len,
            shape: shape.to_vec(),
        });
    }
    Ok(())
}

impl Tensor {
    /// Creates a new Tensor from flat row-major data and a shape.
    ///
    /// # Errors
    /// Returns `NeuraTraceError::TensorCreationError` if `data.len()` differs from the
    /// product of `shape`, and `NeuraTraceError::InvalidShape` if a dimension is zero.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self, NeuraTraceError> {
        check_shape(&shape, data.len())?;
        Ok(Tensor { shape, data })
    }

    /// Creates a zero-filled tensor of the given shape.
    pub fn zeros(shape: &[usize]) -> Result<Self, NeuraTraceError> {
        create::zeros(shape)
    }

    /// Builds a tensor from parts already known to be consistent.
    /// Only used by primitives that compute the output length from the output shape.
    pub(crate) fn from_parts(data: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());
        Tensor { shape, data }
    }

    /// Returns the shape of the tensor.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Returns the flat row-major data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns mutable access to the flat data of this (owned) tensor.
    ///
    /// Since tensors never share storage, writing through this slice cannot affect
    /// any other tensor, trace snapshot or operation parameter.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the tensor and returns its flat data.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Returns the element at the given multi-dimensional index, or `None` if the
    /// index has the wrong rank or is out of bounds.
    pub fn get(&self, indices: &[usize]) -> Option<f32> {
        if indices.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (&idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
            offset = offset * dim + idx;
        }
        self.data.get(offset).copied()
    }

    /// Consumes the tensor and returns it with a new shape, moving the storage.
    ///
    /// # Errors
    /// Returns `NeuraTraceError::ShapeMismatch` if the element counts differ.
    pub fn into_shape(self, new_shape: Vec<usize>) -> Result<Self, NeuraTraceError> {
        view::check_reshape(&self.shape, &new_shape)?;
        Ok(Tensor {
            shape: new_shape,
            data: self.data,
        })
    }

    /// Returns a view of this tensor's storage under `new_shape` without copying.
    ///
    /// The view borrows `self`: the source cannot be mutated or dropped while the view
    /// is alive, and a view can only outlive its source after [`TensorView::to_tensor`].
    ///
    /// # Errors
    /// Returns `NeuraTraceError::ShapeMismatch` if the element counts differ.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<TensorView<'_>, NeuraTraceError> {
        TensorView::new(&self.data, new_shape)
    }
}
