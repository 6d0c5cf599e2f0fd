// src/nn/layers/mod.rs
// Built-in operation variants.

pub mod activation;
pub mod linear;
pub mod residual;

pub use activation::{Activation, ActivationOp};
pub use linear::Linear;
pub use residual::ResidualAdd;

pub(crate) const INPUT_PORTS: &[&str] = &["input"];
pub(crate) const OUTPUT_PORTS: &[&str] = &["output"];
