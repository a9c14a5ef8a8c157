//! CQL Value types - runtime representation of CQL values
//!
//! A `CqlValue` is either a typed null or a present payload. Nulls keep their
//! declared type so operators can tell, for example, an all-null
//! `List<Integer>` apart from a list whose element type never resolved.

use std::fmt;

use crate::error::{ValueError, ValueResult};
use crate::CqlType;

/// The runtime value flowing through evaluation.
///
/// Values are immutable once constructed. A present value's runtime type is
/// derived from its payload variant, so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum CqlValue {
    /// Absent value of a declared type
    Null(CqlType),
    /// Boolean value
    Boolean(bool),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer (Long)
    Long(i64),
    /// Decimal value
    Decimal(f64),
    /// String value
    String(String),
    /// Quantity with value and unit
    Quantity(CqlQuantity),
    /// Ordered list of values
    List(CqlList),
}

impl CqlValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    /// Get the runtime type of this value
    pub fn runtime_type(&self) -> CqlType {
        match self {
            Self::Null(declared) => declared.clone(),
            Self::Boolean(_) => CqlType::Boolean,
            Self::Integer(_) => CqlType::Integer,
            Self::Long(_) => CqlType::Long,
            Self::Decimal(_) => CqlType::Decimal,
            Self::String(_) => CqlType::String,
            Self::Quantity(_) => CqlType::Quantity,
            Self::List(list) => CqlType::list(list.element_type.clone()),
        }
    }

    // === Constructors ===

    /// Create a null of the given declared type
    pub fn null(declared: CqlType) -> Self {
        Self::Null(declared)
    }

    /// Create a null whose type was never resolved
    pub fn untyped_null() -> Self {
        Self::Null(CqlType::Any)
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create an integer value
    pub fn integer(value: i32) -> Self {
        Self::Integer(value)
    }

    /// Create a long value
    pub fn long(value: i64) -> Self {
        Self::Long(value)
    }

    /// Create a decimal value
    pub fn decimal(value: f64) -> Self {
        Self::Decimal(value)
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a quantity value
    pub fn quantity(value: f64, unit: impl Into<String>) -> Self {
        Self::Quantity(CqlQuantity::new(value, unit))
    }

    /// Wrap a list
    pub fn list(list: CqlList) -> Self {
        Self::List(list)
    }

    // === Coercions ===
    //
    // Strict: the payload must already be the requested kind. Callers check
    // `is_null` first; coercing a null is reported rather than defaulted.

    /// Coerce to a list
    pub fn to_list(&self) -> ValueResult<&CqlList> {
        match self {
            Self::List(list) => Ok(list),
            _ => Err(self.coercion_error(CqlType::list(CqlType::Any))),
        }
    }

    /// Coerce to a boolean
    pub fn to_bool(&self) -> ValueResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(self.coercion_error(CqlType::Boolean)),
        }
    }

    /// Coerce to a 32-bit integer
    pub fn to_int32(&self) -> ValueResult<i32> {
        match self {
            Self::Integer(i) => Ok(*i),
            _ => Err(self.coercion_error(CqlType::Integer)),
        }
    }

    /// Coerce to a 64-bit integer
    pub fn to_int64(&self) -> ValueResult<i64> {
        match self {
            Self::Long(l) => Ok(*l),
            _ => Err(self.coercion_error(CqlType::Long)),
        }
    }

    /// Coerce to a 64-bit float
    pub fn to_float64(&self) -> ValueResult<f64> {
        match self {
            Self::Decimal(d) => Ok(*d),
            _ => Err(self.coercion_error(CqlType::Decimal)),
        }
    }

    /// Coerce to a quantity
    pub fn to_quantity(&self) -> ValueResult<&CqlQuantity> {
        match self {
            Self::Quantity(q) => Ok(q),
            _ => Err(self.coercion_error(CqlType::Quantity)),
        }
    }

    fn coercion_error(&self, expected: CqlType) -> ValueError {
        match self {
            Self::Null(declared) => ValueError::NullValue {
                expected,
                declared: declared.clone(),
            },
            _ => ValueError::type_mismatch(expected, self.runtime_type()),
        }
    }
}

impl From<bool> for CqlValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for CqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for CqlValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f64> for CqlValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<CqlQuantity> for CqlValue {
    fn from(value: CqlQuantity) -> Self {
        Self::Quantity(value)
    }
}

impl From<CqlList> for CqlValue {
    fn from(value: CqlList) -> Self {
        Self::List(value)
    }
}

impl fmt::Display for CqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null(_) => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Long(l) => write!(f, "{}L", l),
            Self::Decimal(d) => {
                // CQL decimals always print a fractional part
                let s = d.to_string();
                if s.contains('.') || !d.is_finite() {
                    write!(f, "{}", s)
                } else {
                    write!(f, "{}.0", s)
                }
            }
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Self::Quantity(q) => write!(f, "{}", q),
            Self::List(l) => write!(f, "{}", l),
        }
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// CQL Quantity - a magnitude with a unit label
///
/// Units are compared as plain strings; no UCUM conversion happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct CqlQuantity {
    /// Numeric value
    pub value: f64,
    /// Unit label (e.g., "mg", "kg", "m/s")
    pub unit: String,
}

impl CqlQuantity {
    /// Create a new quantity
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Whether both quantities carry the identical unit label
    pub fn same_unit(&self, other: &Self) -> bool {
        self.unit == other.unit
    }
}

impl fmt::Display for CqlQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if !self.unit.is_empty() {
            write!(f, " '{}'", self.unit)?;
        }
        Ok(())
    }
}

// ============================================================================
// List
// ============================================================================

/// CQL List - ordered collection of values with a declared element type
///
/// Every present element has exactly the declared element type, unless the
/// declared type is `Any`. Null elements are always admissible.
#[derive(Debug, Clone, PartialEq)]
pub struct CqlList {
    element_type: CqlType,
    elements: Vec<CqlValue>,
}

impl CqlList {
    /// Create an empty list with the specified element type
    pub fn empty(element_type: CqlType) -> Self {
        Self {
            element_type,
            elements: Vec::new(),
        }
    }

    /// Create a list with a declared element type, checking every element
    pub fn new(element_type: CqlType, elements: Vec<CqlValue>) -> ValueResult<Self> {
        let mismatch = if element_type.is_any() {
            None
        } else {
            elements
                .iter()
                .find(|e| !e.is_null() && e.runtime_type() != element_type)
        };
        if let Some(bad) = mismatch {
            return Err(ValueError::ElementTypeMismatch {
                found: bad.runtime_type(),
                declared: element_type,
            });
        }
        Ok(Self {
            element_type,
            elements,
        })
    }

    /// Create a list from elements, inferring the element type
    ///
    /// The element type is the type shared by all present elements, or `Any`
    /// when there are none.
    pub fn from_elements(elements: Vec<CqlValue>) -> ValueResult<Self> {
        let mut inferred: Option<CqlType> = None;
        for elem in elements.iter().filter(|e| !e.is_null()) {
            let ty = elem.runtime_type();
            match &inferred {
                None => inferred = Some(ty),
                Some(first) if *first != ty => {
                    return Err(ValueError::HeterogeneousList {
                        first: first.clone(),
                        other: ty,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            element_type: inferred.unwrap_or(CqlType::Any),
            elements,
        })
    }

    /// Declared element type
    pub fn element_type(&self) -> &CqlType {
        &self.element_type
    }

    /// Elements in order
    pub fn elements(&self) -> &[CqlValue] {
        &self.elements
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over elements
    pub fn iter(&self) -> impl Iterator<Item = &CqlValue> {
        self.elements.iter()
    }
}

impl fmt::Display for CqlList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, elem) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", elem)?;
        }
        write!(f, "}}")
    }
}
