//! CQL runtime type system
//!
//! This crate defines what flows through evaluation:
//! - `CqlType` runtime type descriptors (scalars, `List<T>`, `Any`)
//! - `CqlValue` typed, nullable values with strict coercions
//! - `CqlQuantity` and `CqlList` payloads
//! - JSON rendering of values
//!
//! Values and types are immutable after construction and are `Send + Sync`,
//! so independent evaluations may share them across threads.

pub mod error;
pub mod json;
pub mod type_system;
pub mod value;

pub use error::{ValueError, ValueResult};
pub use type_system::CqlType;
pub use value::{CqlList, CqlQuantity, CqlValue};
