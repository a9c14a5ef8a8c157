//! CQL Evaluation Engine
//!
//! This module provides the `CqlEngine` dispatcher. The surrounding
//! interpreter evaluates an aggregate's operand first, then hands the node and
//! the operand value here.

use crate::error::EvalResult;
use crate::registry::{OperatorRegistry, OperatorSignature};
use octofhir_cql_elm::{AggregateOperator, Expression, UnaryNode};
use octofhir_cql_types::{CqlType, CqlValue};

/// The main CQL evaluation engine
///
/// The engine holds no per-evaluation state. A single instance can be shared
/// by reference across threads evaluating against different data.
#[derive(Debug, Clone)]
pub struct CqlEngine {
    /// Operator overload registry
    pub(crate) registry: OperatorRegistry,
}

impl Default for CqlEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CqlEngine {
    /// Create a new engine with standard operators
    pub fn new() -> Self {
        Self {
            registry: OperatorRegistry::with_standard_operators(),
        }
    }

    /// Create an engine with a custom registry
    pub fn with_registry(registry: OperatorRegistry) -> Self {
        Self { registry }
    }

    /// Get the registry
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Declared overload for an operator applied to an operand type
    pub fn signature(
        &self,
        operator: AggregateOperator,
        operand_type: &CqlType,
    ) -> Option<&OperatorSignature> {
        self.registry.resolve(operator, operand_type)
    }

    /// Evaluate an ELM aggregate node against its evaluated operand
    pub fn evaluate(&self, expr: &Expression, operand: &CqlValue) -> EvalResult<CqlValue> {
        self.evaluate_aggregate(expr.operator(), expr, operand)
    }

    /// Evaluate an aggregate operator for any node type
    ///
    /// The node is only read for error messages. Null handling is up to each
    /// operator: several treat a null operand as their identity result.
    pub fn evaluate_aggregate<N: UnaryNode + ?Sized>(
        &self,
        operator: AggregateOperator,
        node: &N,
        operand: &CqlValue,
    ) -> EvalResult<CqlValue> {
        log::trace!("evaluating {} on {}", operator, operand.runtime_type());

        let result = match operator {
            AggregateOperator::AllTrue => self.eval_all_true(node, operand),
            AggregateOperator::AnyTrue => self.eval_any_true(node, operand),
            AggregateOperator::Count => self.eval_count(node, operand),
            AggregateOperator::Sum => self.eval_sum(node, operand),
        };

        if let Err(err) = &result {
            log::debug!("{} failed: {}", operator, err);
        }
        result
    }
}
