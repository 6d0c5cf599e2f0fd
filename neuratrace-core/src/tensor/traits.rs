// src/tensor/traits.rs

use crate::tensor::Tensor;
use std::fmt::{self, Debug, Display};

/// Tensors longer than this are rendered truncated.
pub const DISPLAY_MAX_ELEMENTS: usize = 20;
/// Number of leading values shown for a truncated tensor.
pub const DISPLAY_HEAD: usize = 5;
/// Number of trailing values shown for a truncated tensor.
pub const DISPLAY_TAIL: usize = 3;

fn write_values(f: &mut fmt::Formatter<'_>, values: &[f32]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:.4}", v)?;
    }
    Ok(())
}

impl Display for Tensor {
    /// Bounded rendering used by inspection tooling: `Tensor[2, 3] [0.1000, ...]`.
    ///
    /// When the tensor holds more than 20 elements only the first 5 and the last 3
    /// values are written, separated by `...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor[")?;
        for (i, d) in self.shape.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "] [")?;
        let n = self.data.len();
        if n > DISPLAY_MAX_ELEMENTS {
            write_values(f, &self.data[..DISPLAY_HEAD])?;
            write!(f, ", ..., ")?;
            write_values(f, &self.data[n - DISPLAY_TAIL..])?;
        } else {
            write_values(f, &self.data)?;
        }
        write!(f, "]")
    }
}

impl Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={:?}, numel={}, data={})", self.shape, self.numel(), self)
    }
}
