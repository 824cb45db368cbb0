// ============================================================================
// Arithmetic Module
// Validated binary operations over calculator operands
// ============================================================================

mod operation;
mod operations;

pub use operation::Operation;
pub use operations::{add, divide, multiply, subtract};
