//! Operator signature registry
//!
//! Maps each aggregate operator to its declared overloads, e.g.
//! `Sum(List<Long>) Long`. Callers resolve declared result types through it;
//! evaluation itself never consults it.

use octofhir_cql_elm::AggregateOperator;
use octofhir_cql_types::CqlType;
use std::collections::HashMap;
use std::fmt;

/// Operator signature for type checking
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorSignature {
    /// Operator name
    pub name: String,
    /// Operand types
    pub operand_types: Vec<CqlType>,
    /// Return type
    pub return_type: CqlType,
}

impl OperatorSignature {
    /// Create a unary operator signature
    pub fn unary(name: impl Into<String>, operand_type: CqlType, return_type: CqlType) -> Self {
        Self {
            name: name.into(),
            operand_types: vec![operand_type],
            return_type,
        }
    }

    /// Check if this signature matches given operand types
    ///
    /// `Any` in a signature is a type parameter: `List<Any>` accepts every
    /// list type.
    pub fn matches(&self, operand_types: &[CqlType]) -> bool {
        self.operand_types.len() == operand_types.len()
            && self
                .operand_types
                .iter()
                .zip(operand_types)
                .all(|(sig_type, actual_type)| type_matches(sig_type, actual_type))
    }
}

fn type_matches(sig_type: &CqlType, actual_type: &CqlType) -> bool {
    match (sig_type, actual_type) {
        (CqlType::Any, _) => true,
        (CqlType::List(sig_elem), CqlType::List(actual_elem)) => type_matches(sig_elem, actual_elem),
        _ => sig_type == actual_type,
    }
}

impl fmt::Display for OperatorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands: Vec<String> = self.operand_types.iter().map(CqlType::qualified_name).collect();
        write!(f, "{}({}) {}", self.name, operands.join(", "), self.return_type)
    }
}

/// Registry of aggregate operator overloads
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<AggregateOperator, Vec<OperatorSignature>>,
}

impl OperatorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard CQL aggregate overloads
    pub fn with_standard_operators() -> Self {
        let mut registry = Self::new();
        let any_list = CqlType::list(CqlType::Any);

        registry.register(
            AggregateOperator::AllTrue,
            CqlType::list(CqlType::Boolean),
            CqlType::Boolean,
        );
        registry.register(
            AggregateOperator::AnyTrue,
            CqlType::list(CqlType::Boolean),
            CqlType::Boolean,
        );
        registry.register(AggregateOperator::Count, any_list, CqlType::Integer);
        for numeric in [CqlType::Integer, CqlType::Long, CqlType::Decimal, CqlType::Quantity] {
            registry.register(AggregateOperator::Sum, CqlType::list(numeric.clone()), numeric);
        }

        registry
    }

    /// Register an overload
    pub fn register(
        &mut self,
        operator: AggregateOperator,
        operand_type: CqlType,
        return_type: CqlType,
    ) {
        let signature = OperatorSignature::unary(operator.name(), operand_type, return_type);
        self.operators.entry(operator).or_default().push(signature);
    }

    /// Find the overload matching an operand type
    pub fn resolve(
        &self,
        operator: AggregateOperator,
        operand_type: &CqlType,
    ) -> Option<&OperatorSignature> {
        self.overloads(operator)
            .iter()
            .find(|sig| sig.matches(std::slice::from_ref(operand_type)))
    }

    /// Declared result type for an operand type
    pub fn return_type(&self, operator: AggregateOperator, operand_type: &CqlType) -> Option<CqlType> {
        self.resolve(operator, operand_type)
            .map(|sig| sig.return_type.clone())
    }

    /// All overloads of an operator
    pub fn overloads(&self, operator: AggregateOperator) -> &[OperatorSignature] {
        self.operators.get(&operator).map(Vec::as_slice).unwrap_or(&[])
    }
}
