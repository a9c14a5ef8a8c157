//! Aggregate Functions for CQL
//!
//! Implements: AllTrue, AnyTrue, Count, Sum
//!
//! Each operator receives an already-evaluated operand. A null list and an
//! empty list give the same result; what that result is differs per operator:
//! `AllTrue` is true, `AnyTrue` is false, `Count` is 0 and `Sum` is null.

use crate::engine::CqlEngine;
use crate::error::{EvalError, EvalResult};
use crate::operators::nulls::{list_operand, present_elements};
use octofhir_cql_elm::UnaryNode;
use octofhir_cql_types::{CqlList, CqlQuantity, CqlType, CqlValue, ValueResult};

impl CqlEngine {
    /// Evaluate AllTrue
    ///
    /// `AllTrue(argument List<Boolean>) Boolean`
    pub fn eval_all_true<N: UnaryNode + ?Sized>(
        &self,
        node: &N,
        operand: &CqlValue,
    ) -> EvalResult<CqlValue> {
        reduce_logical(node, operand, false)
    }

    /// Evaluate AnyTrue
    ///
    /// `AnyTrue(argument List<Boolean>) Boolean`
    pub fn eval_any_true<N: UnaryNode + ?Sized>(
        &self,
        node: &N,
        operand: &CqlValue,
    ) -> EvalResult<CqlValue> {
        reduce_logical(node, operand, true)
    }

    /// Evaluate Count
    ///
    /// `Count(argument List<T>) Integer`. Never null.
    pub fn eval_count<N: UnaryNode + ?Sized>(
        &self,
        node: &N,
        operand: &CqlValue,
    ) -> EvalResult<CqlValue> {
        let count = match list_operand(node, operand)? {
            None => 0,
            Some(list) => present_elements(list).fold(0i32, |n, _| n.wrapping_add(1)),
        };
        Ok(CqlValue::Integer(count))
    }

    /// Evaluate Sum
    ///
    /// ```text
    /// Sum(argument List<Integer>) Integer
    /// Sum(argument List<Long>) Long
    /// Sum(argument List<Decimal>) Decimal
    /// Sum(argument List<Quantity>) Quantity
    /// ```
    ///
    /// Dispatches on the list's declared element type, so an empty or all-null
    /// list still picks its accumulator up front. A null result carries that
    /// element type; a null operand declared as a non-list gives `Null(Any)`.
    ///
    /// Precondition: a `List<Any>` operand contains only nulls. The type
    /// checker only leaves an element type unresolved when no element ever
    /// had a concrete type, so such a list sums to null without inspection.
    pub fn eval_sum<N: UnaryNode + ?Sized>(
        &self,
        node: &N,
        operand: &CqlValue,
    ) -> EvalResult<CqlValue> {
        let Some(list) = list_operand(node, operand)? else {
            let declared = operand.runtime_type();
            return Ok(CqlValue::null(
                declared.element_type().cloned().unwrap_or_default(),
            ));
        };

        match list.element_type() {
            CqlType::Any => Ok(CqlValue::null(CqlType::Any)),
            CqlType::Integer => {
                let sum = accumulate(node, list, 0i32, CqlValue::to_int32, i32::wrapping_add)?;
                Ok(sum.map_or(CqlValue::null(CqlType::Integer), CqlValue::Integer))
            }
            CqlType::Long => {
                let sum = accumulate(node, list, 0i64, CqlValue::to_int64, i64::wrapping_add)?;
                Ok(sum.map_or(CqlValue::null(CqlType::Long), CqlValue::Long))
            }
            CqlType::Decimal => {
                let sum = accumulate(node, list, 0.0f64, CqlValue::to_float64, |a, b| a + b)?;
                Ok(sum.map_or(CqlValue::null(CqlType::Decimal), CqlValue::Decimal))
            }
            CqlType::Quantity => {
                let sum = sum_quantities(node, list)?;
                Ok(sum.map_or(CqlValue::null(CqlType::Quantity), CqlValue::Quantity))
            }
            CqlType::Boolean | CqlType::String | CqlType::List(_) => Err(EvalError::type_mismatch(
                node,
                "List<System.Integer>, List<System.Long>, List<System.Decimal> or List<System.Quantity>",
                operand.runtime_type().qualified_name(),
            )),
        }
    }
}

/// Shared body of AllTrue and AnyTrue
///
/// Stops at the first present element equal to `decisive`; otherwise the
/// result is the operator's identity, `!decisive`.
fn reduce_logical<N: UnaryNode + ?Sized>(
    node: &N,
    operand: &CqlValue,
    decisive: bool,
) -> EvalResult<CqlValue> {
    let Some(list) = list_operand(node, operand)? else {
        return Ok(CqlValue::Boolean(!decisive));
    };

    for elem in present_elements(list) {
        let value = elem.to_bool().map_err(|err| EvalError::from_value(node, err))?;
        if value == decisive {
            return Ok(CqlValue::Boolean(decisive));
        }
    }
    Ok(CqlValue::Boolean(!decisive))
}

/// Fold the present elements of a list at the declared numeric width
///
/// Returns `None` when no element contributed.
fn accumulate<N, T>(
    node: &N,
    list: &CqlList,
    zero: T,
    coerce: impl Fn(&CqlValue) -> ValueResult<T>,
    add: impl Fn(T, T) -> T,
) -> EvalResult<Option<T>>
where
    N: UnaryNode + ?Sized,
    T: Copy,
{
    let mut sum = None;
    for elem in present_elements(list) {
        let value = coerce(elem).map_err(|err| EvalError::from_value(node, err))?;
        sum = Some(add(sum.unwrap_or(zero), value));
    }
    Ok(sum)
}

/// Sum quantities that all share the unit of the first present element
fn sum_quantities<N: UnaryNode + ?Sized>(
    node: &N,
    list: &CqlList,
) -> EvalResult<Option<CqlQuantity>> {
    let mut sum: Option<CqlQuantity> = None;
    for elem in present_elements(list) {
        let quantity = elem.to_quantity().map_err(|err| EvalError::from_value(node, err))?;
        let total = sum.get_or_insert_with(|| CqlQuantity::new(0.0, quantity.unit.clone()));
        if !total.same_unit(quantity) {
            return Err(EvalError::unit_conflict(node, &total.unit, &quantity.unit));
        }
        total.value += quantity.value;
    }
    Ok(sum)
}
