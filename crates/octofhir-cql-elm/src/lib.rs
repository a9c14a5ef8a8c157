//! CQL ELM (Expression Logical Model) nodes
//!
//! This crate provides the node side of the evaluator boundary:
//! - `Element` source metadata
//! - `AggregateOperator` and the `Expression` nodes tagged by ELM name
//! - the `UnaryNode` trait the evaluator reads operator names through

pub mod model;

pub use model::*;
