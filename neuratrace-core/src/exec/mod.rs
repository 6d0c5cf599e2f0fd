//! # Execution
//!
//! [`Executor`] runs a [`Graph`](crate::graph::Graph) once and returns a [`Trace`]: one
//! clone-isolated [`TraceStep`] per operation plus the overall input and output.

mod executor;
mod store;
mod trace;

pub use executor::Executor;
pub use store::ValueStore;
pub use trace::{Trace, TraceStep};
