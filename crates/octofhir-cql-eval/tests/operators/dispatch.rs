//! Dispatcher Tests
//!
//! The engine forwards node and operand to the operator and returns the
//! operator's result or error unchanged.

use octofhir_cql_elm::{AggregateExpression, AggregateOperator, Expression, UnaryNode};
use octofhir_cql_eval::{CqlEngine, EvalError, OperatorRegistry};
use octofhir_cql_types::{CqlList, CqlType, CqlValue, ValueError};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

/// A caller-side node type, as an interpreter with its own AST would pass
struct CallSite {
    name: &'static str,
    position: &'static str,
}

impl UnaryNode for CallSite {
    fn operator_name(&self) -> &str {
        self.name
    }

    fn locator(&self) -> Option<&str> {
        Some(self.position)
    }
}

fn mixed_units() -> CqlValue {
    CqlValue::list(
        CqlList::from_elements(vec![
            CqlValue::quantity(2.0, "mg"),
            CqlValue::quantity(3.0, "g"),
        ])
        .unwrap(),
    )
}

#[test]
fn test_error_names_operator_and_locator() {
    let engine = CqlEngine::new();
    let expr = Expression::Sum(AggregateExpression::at("3:1-3:10"));

    let err = engine.evaluate(&expr, &mixed_units()).unwrap_err();
    assert_eq!(err.operator().locator.as_deref(), Some("3:1-3:10"));
    assert_snapshot!(err.to_string(), @"Sum at 3:1-3:10: cannot sum quantities with different units 'mg' and 'g'");
}

#[test]
fn test_foreign_node_type() {
    let engine = CqlEngine::new();
    let site = CallSite {
        name: "Sum",
        position: "12:4-12:30",
    };

    let err = engine
        .evaluate_aggregate(AggregateOperator::Sum, &site, &mixed_units())
        .unwrap_err();
    assert!(err.is_unit_conflict());
    assert_eq!(err.operator().name, "Sum");

    let dyn_site: &dyn UnaryNode = &site;
    let count = engine
        .evaluate_aggregate(AggregateOperator::Count, dyn_site, &mixed_units())
        .unwrap();
    assert_eq!(count, CqlValue::integer(2));
}

#[test]
fn test_signature_lookup() {
    let engine = CqlEngine::new();
    let sig = engine
        .signature(AggregateOperator::Sum, &CqlType::list(CqlType::Quantity))
        .unwrap();
    assert_eq!(sig.return_type, CqlType::Quantity);
    assert!(engine
        .signature(AggregateOperator::AllTrue, &CqlType::list(CqlType::Integer))
        .is_none());
}

#[test]
fn test_sum_result_type_ignores_registry() {
    let mut registry = OperatorRegistry::new();
    registry.register(
        AggregateOperator::Sum,
        CqlType::list(CqlType::Integer),
        CqlType::Decimal,
    );
    let engine = CqlEngine::with_registry(registry);
    let expr = Expression::Sum(AggregateExpression::default());

    let all_null = CqlValue::list(
        CqlList::new(CqlType::Integer, vec![CqlValue::untyped_null()]).unwrap(),
    );
    let present = CqlValue::list(
        CqlList::new(CqlType::Integer, vec![CqlValue::integer(2)]).unwrap(),
    );
    let null_operand = CqlValue::null(CqlType::list(CqlType::Integer));

    let types: Vec<CqlType> = [all_null, present, null_operand]
        .iter()
        .map(|operand| engine.evaluate(&expr, operand).unwrap().runtime_type())
        .collect();
    assert_eq!(types, vec![CqlType::Integer; 3]);
}

#[test]
fn test_sum_of_untyped_null_operand() {
    let engine = CqlEngine::with_registry(OperatorRegistry::new());
    let result = engine
        .evaluate(&Expression::Sum(AggregateExpression::default()), &CqlValue::untyped_null())
        .unwrap();
    assert_eq!(result, CqlValue::untyped_null());
    assert!(engine.registry().overloads(AggregateOperator::Sum).is_empty());
}

#[test]
fn test_coercing_null_is_reported_with_operator() {
    let err = EvalError::from_value(
        &Expression::AllTrue(AggregateExpression::default()),
        ValueError::NullValue {
            expected: CqlType::Boolean,
            declared: CqlType::Any,
        },
    );
    assert!(matches!(err, EvalError::Value { .. }));
    assert_snapshot!(err.to_string(), @"AllTrue: Cannot convert null of type System.Any to System.Boolean");
}

#[test]
fn test_shared_engine_across_threads() {
    let engine = CqlEngine::new();
    let contexts: Vec<CqlValue> = (0..4)
        .map(|n| {
            CqlValue::list(
                CqlList::from_elements((0..=n).map(CqlValue::integer).collect()).unwrap(),
            )
        })
        .collect();
    let expr = Expression::Count(AggregateExpression::default());
    let (engine, expr) = (&engine, &expr);

    let counts: Vec<CqlValue> = std::thread::scope(|scope| {
        let handles: Vec<_> = contexts
            .iter()
            .map(|operand| scope.spawn(move || engine.evaluate(expr, operand).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(
        counts,
        (1..=4).map(CqlValue::integer).collect::<Vec<_>>()
    );
}
