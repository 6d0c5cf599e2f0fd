//! # NeuraTrace core
//!
//! Forward-pass simulation of a small computation graph with a fully replayable trace.
//!
//! - [`tensor`]: the n-dimensional `f32` value type and its creation functions.
//! - [`ops`]: numeric primitives (matmul, add, activations, softmax, transpose).
//! - [`nn`]: the [`Operation`](nn::Operation) capability and its built-in variants.
//! - [`graph`]: operation container, port wiring and deterministic scheduling.
//! - [`exec`]: the executor and the clone-isolated [`Trace`](exec::Trace) it produces.
//! - [`model`]: assemblers for common network shapes.

pub mod error;
pub mod exec;
pub mod graph;
pub mod model;
pub mod nn;
pub mod ops;
pub mod tensor;
pub mod utils;

// Re-export the main types so they are reachable from the crate root
pub use error::NeuraTraceError;
pub use exec::{Executor, Trace, TraceStep};
pub use graph::{Graph, OpNode, PortRef};
pub use tensor::{Tensor, TensorView};
