// src/model/mod.rs
// Graph assemblers building common network shapes out of built-in operations.

pub mod mlp;

pub use mlp::{build_mlp, MlpConfig};
