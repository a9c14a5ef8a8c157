//! ELM (Expression Logical Model) nodes for aggregate operators
//!
//! These are the already type-checked nodes the evaluator receives. The
//! operand subexpression has been evaluated by the surrounding interpreter,
//! so a node here only identifies the operator and where it came from.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Base Element
// ============================================================================

/// Base element for all ELM nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Local identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
    /// Locator (source position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
    /// Result type name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type_name: Option<String>,
}

impl Element {
    /// Create an element pointing at a source location
    pub fn at(locator: impl Into<String>) -> Self {
        Self {
            locator: Some(locator.into()),
            ..Self::default()
        }
    }
}

/// A node with a single, already-evaluated operand
///
/// The evaluator only needs the operator name and source position, both for
/// error messages.
pub trait UnaryNode {
    /// Operator name as written in ELM (e.g. `Sum`)
    fn operator_name(&self) -> &str;

    /// Source position, when the translator recorded one
    fn locator(&self) -> Option<&str> {
        None
    }
}

// ============================================================================
// Aggregate operators
// ============================================================================

/// The aggregate operators this evaluator implements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregateOperator {
    AllTrue,
    AnyTrue,
    Count,
    Sum,
}

impl AggregateOperator {
    /// Every aggregate operator, in ELM name order
    pub const ALL: [AggregateOperator; 4] = [Self::AllTrue, Self::AnyTrue, Self::Count, Self::Sum];

    /// ELM operator name
    pub const fn name(self) -> &'static str {
        match self {
            Self::AllTrue => "AllTrue",
            Self::AnyTrue => "AnyTrue",
            Self::Count => "Count",
            Self::Sum => "Sum",
        }
    }

    /// Resolve an ELM operator name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }
}

impl fmt::Display for AggregateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregateOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// An operator name that is not an aggregate operator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown aggregate operator: {0}")]
pub struct UnknownOperator(pub String);

/// Aggregate expression node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregateExpression {
    #[serde(flatten)]
    pub element: Element,
}

impl AggregateExpression {
    /// Create a node at a source location
    pub fn at(locator: impl Into<String>) -> Self {
        Self {
            element: Element::at(locator),
        }
    }
}

/// ELM aggregate expressions, tagged by operator name as in ELM JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    AllTrue(AggregateExpression),
    AnyTrue(AggregateExpression),
    Count(AggregateExpression),
    Sum(AggregateExpression),
}

impl Expression {
    /// Build the node for an operator
    pub fn new(operator: AggregateOperator, node: AggregateExpression) -> Self {
        match operator {
            AggregateOperator::AllTrue => Self::AllTrue(node),
            AggregateOperator::AnyTrue => Self::AnyTrue(node),
            AggregateOperator::Count => Self::Count(node),
            AggregateOperator::Sum => Self::Sum(node),
        }
    }

    /// The operator this node applies
    pub fn operator(&self) -> AggregateOperator {
        match self {
            Self::AllTrue(_) => AggregateOperator::AllTrue,
            Self::AnyTrue(_) => AggregateOperator::AnyTrue,
            Self::Count(_) => AggregateOperator::Count,
            Self::Sum(_) => AggregateOperator::Sum,
        }
    }

    /// The node payload
    pub fn node(&self) -> &AggregateExpression {
        match self {
            Self::AllTrue(e) | Self::AnyTrue(e) | Self::Count(e) | Self::Sum(e) => e,
        }
    }
}

impl UnaryNode for Expression {
    fn operator_name(&self) -> &str {
        self.operator().name()
    }

    fn locator(&self) -> Option<&str> {
        self.node().element.locator.as_deref()
    }
}
