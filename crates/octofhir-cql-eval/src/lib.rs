//! CQL Evaluation Engine
//!
//! This crate evaluates CQL aggregate operators over already-evaluated
//! operands:
//!
//! - **AllTrue / AnyTrue**: logical reduction of a `List<Boolean>`
//! - **Count**: number of non-null elements of any list
//! - **Sum**: width-preserving sum of `Integer`, `Long`, `Decimal` and
//!   unit-checked `Quantity` lists
//!
//! # Example
//!
//! ```
//! use octofhir_cql_elm::{AggregateExpression, Expression};
//! use octofhir_cql_eval::CqlEngine;
//! use octofhir_cql_types::{CqlList, CqlValue};
//!
//! let engine = CqlEngine::new();
//! let operand = CqlValue::list(
//!     CqlList::from_elements(vec![CqlValue::integer(1), CqlValue::untyped_null(), CqlValue::integer(3)])
//!         .unwrap(),
//! );
//!
//! let sum = engine.evaluate(&Expression::Sum(AggregateExpression::default()), &operand).unwrap();
//! assert_eq!(sum, CqlValue::integer(4));
//! ```
//!
//! # Null handling
//!
//! CQL is three-valued and each aggregate has its own null rule:
//!
//! - A null list gives `true` for AllTrue, `false` for AnyTrue, `0` for Count
//!   and null for Sum. An empty list gives the same.
//! - Null elements are skipped by every operator.
//! - Sum over a list with no non-null elements is null, not zero.

pub mod engine;
pub mod error;
pub mod operators;
pub mod registry;

// Re-export main types
pub use engine::CqlEngine;
pub use error::{EvalError, EvalResult, OperatorRef};
pub use registry::{OperatorRegistry, OperatorSignature};
