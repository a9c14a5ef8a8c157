//! CQL Operator Implementations
//!
//! - Null handling shared by every list operator (`nulls`)
//! - Aggregate functions (AllTrue, AnyTrue, Count, Sum)

pub mod aggregate;
pub mod nulls;

pub use nulls::{list_operand, present_elements};
