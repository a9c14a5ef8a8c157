//! Evaluation errors for the CQL engine

use octofhir_cql_elm::UnaryNode;
use octofhir_cql_types::{CqlType, ValueError};
use std::fmt;
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// The operator an error was raised by, with its source position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRef {
    pub name: String,
    pub locator: Option<String>,
}

impl OperatorRef {
    /// Capture the operator name and locator of a node
    pub fn of<N: UnaryNode + ?Sized>(node: &N) -> Self {
        Self {
            name: node.operator_name().to_string(),
            locator: node.locator().map(str::to_string),
        }
    }
}

impl fmt::Display for OperatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.locator {
            Some(locator) => write!(f, "{} at {}", self.name, locator),
            None => f.write_str(&self.name),
        }
    }
}

/// Errors that can occur during CQL evaluation
///
/// These surface type-checking defects at runtime. They end the current
/// evaluation and are never recovered from inside an operator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Operand or element is not of the kind the operator requires
    #[error("{operator}: type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        operator: OperatorRef,
        expected: String,
        found: String,
    },

    /// Quantities with different units met in one summation
    #[error("{operator}: cannot sum quantities with different units '{first}' and '{second}'")]
    UnitConflict {
        operator: OperatorRef,
        first: String,
        second: String,
    },

    /// Any other value defect, such as coercing a null
    #[error("{operator}: {source}")]
    Value {
        operator: OperatorRef,
        #[source]
        source: ValueError,
    },
}

impl EvalError {
    /// Create a type mismatch error
    pub fn type_mismatch<N: UnaryNode + ?Sized>(
        node: &N,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            operator: OperatorRef::of(node),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a type mismatch error from CqlTypes
    pub fn type_mismatch_cql<N: UnaryNode + ?Sized>(
        node: &N,
        expected: &CqlType,
        found: &CqlType,
    ) -> Self {
        Self::type_mismatch(node, expected.qualified_name(), found.qualified_name())
    }

    /// Create a unit conflict error
    pub fn unit_conflict<N: UnaryNode + ?Sized>(
        node: &N,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::UnitConflict {
            operator: OperatorRef::of(node),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Attach operator context to a value error
    ///
    /// A coercion to the wrong kind becomes `TypeMismatch`; anything else is
    /// kept as `Value`.
    pub fn from_value<N: UnaryNode + ?Sized>(node: &N, err: ValueError) -> Self {
        match err {
            ValueError::TypeMismatch { expected, found } => {
                Self::type_mismatch_cql(node, &expected, &found)
            }
            source => Self::Value {
                operator: OperatorRef::of(node),
                source,
            },
        }
    }

    /// The operator that raised this error
    pub fn operator(&self) -> &OperatorRef {
        match self {
            Self::TypeMismatch { operator, .. }
            | Self::UnitConflict { operator, .. }
            | Self::Value { operator, .. } => operator,
        }
    }

    /// Check whether this is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check whether this is a unit conflict
    pub fn is_unit_conflict(&self) -> bool {
        matches!(self, Self::UnitConflict { .. })
    }
}
