// src/tensor/create.rs

use crate::error::NeuraTraceError;
use crate::tensor::Tensor;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor, NeuraTraceError> {
    full(shape, 0.0)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor, NeuraTraceError> {
    full(shape, 1.0)
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor, NeuraTraceError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a new Tensor from a Vec<f32> and shape.
pub fn from_vec(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Tensor, NeuraTraceError> {
    Tensor::new(data_vec, shape)
}

/// Creates a tensor with values drawn uniformly from `[0, 1)` using the given generator.
///
/// The generator is explicit so that a fixed seed always produces the same tensor.
pub fn rand_uniform<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Result<Tensor, NeuraTraceError> {
    let numel = shape.iter().product();
    let data_vec: Vec<f32> = (0..numel).map(|_| rng.gen::<f32>()).collect();
    Tensor::new(data_vec, shape.to_vec())
}

/// Creates a `[fan_in, fan_out]` weight matrix with Xavier/Glorot uniform initialization.
///
/// Values are drawn uniformly from `[-bound, bound)` with `bound = sqrt(6 / (fan_in + fan_out))`.
///
/// # Errors
/// Returns `NeuraTraceError::InvalidShape` if either fan is zero.
pub fn xavier_uniform<R: Rng + ?Sized>(
    fan_in: usize,
    fan_out: usize,
    rng: &mut R,
) -> Result<Tensor, NeuraTraceError> {
    if fan_in == 0 || fan_out == 0 {
        return Err(NeuraTraceError::InvalidShape {
            shape: vec![fan_in, fan_out],
        });
    }
    let bound = (6.0 / (fan_in + fan_out) as f32).sqrt();
    let dist = Uniform::new(-bound, bound);
    let data_vec: Vec<f32> = (0..fan_in * fan_out).map(|_| dist.sample(rng)).collect();
    Tensor::new(data_vec, vec![fan_in, fan_out])
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
