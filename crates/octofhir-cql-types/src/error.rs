//! Errors raised while building or coercing runtime values

use crate::CqlType;
use thiserror::Error;

/// Result type for value operations
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors that can occur when constructing or coercing a `CqlValue`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Payload does not match the requested kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: CqlType, found: CqlType },

    /// A coercion was attempted on a null value
    #[error("Cannot convert null of type {declared} to {expected}")]
    NullValue { expected: CqlType, declared: CqlType },

    /// A list element does not match the list's declared element type
    #[error("List<{declared}> cannot hold an element of type {found}")]
    ElementTypeMismatch { declared: CqlType, found: CqlType },

    /// Element type inference found more than one element type
    #[error("Cannot infer a list element type from {first} and {other}")]
    HeterogeneousList { first: CqlType, other: CqlType },
}

impl ValueError {
    /// Create a type mismatch error
    pub fn type_mismatch(expected: CqlType, found: CqlType) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// The kind the failed coercion or construction expected
    pub fn expected(&self) -> &CqlType {
        match self {
            Self::TypeMismatch { expected, .. } | Self::NullValue { expected, .. } => expected,
            Self::ElementTypeMismatch { declared, .. } => declared,
            Self::HeterogeneousList { first, .. } => first,
        }
    }

    /// The kind actually encountered
    pub fn found(&self) -> &CqlType {
        match self {
            Self::TypeMismatch { found, .. } | Self::ElementTypeMismatch { found, .. } => found,
            Self::NullValue { declared, .. } => declared,
            Self::HeterogeneousList { other, .. } => other,
        }
    }
}
