// Export foundational arithmetic operations directly
pub mod add;

pub use add::add_op;
