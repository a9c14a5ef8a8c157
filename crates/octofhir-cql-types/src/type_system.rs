//! CQL runtime type descriptors
//!
//! `CqlType` is the closed set of type tags the evaluator consults to pick
//! operator behavior. Every `CqlValue` carries one, including nulls.

use std::fmt;

/// Runtime type descriptor
///
/// `List` carries its element descriptor recursively. `Any` as a list
/// element type means the type checker could not resolve a concrete element
/// type, which only happens for lists made up entirely of nulls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CqlType {
    /// The Any type - supertype of all types
    #[default]
    Any,
    /// Boolean type (true/false/null)
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// Decimal, represented as a 64-bit float at runtime
    Decimal,
    /// Unicode string
    String,
    /// Quantity with value and unit
    Quantity,
    /// List of elements
    List(Box<CqlType>),
}

impl CqlType {
    /// Create a list type
    pub fn list(element_type: CqlType) -> Self {
        Self::List(Box::new(element_type))
    }

    /// Check if this is the Any type
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// Check if this is a list type
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Long | Self::Decimal)
    }

    /// Get the element type for List types
    pub fn element_type(&self) -> Option<&CqlType> {
        match self {
            Self::List(elem) => Some(elem),
            _ => None,
        }
    }

    /// Get the simple name of this type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Decimal => "Decimal",
            Self::String => "String",
            Self::Quantity => "Quantity",
            Self::List(_) => "List",
        }
    }

    /// Get the fully qualified name of this type
    pub fn qualified_name(&self) -> String {
        match self {
            Self::List(elem) => format!("List<{}>", elem.qualified_name()),
            other => format!("System.{}", other.name()),
        }
    }
}

impl fmt::Display for CqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}
