//! Null handling for list operands
//!
//! A null list never reaches element inspection: each operator maps it to
//! its own result (`true`, `false`, `0` or null). Inside a present list,
//! null elements carry no information and are skipped.

use crate::error::{EvalError, EvalResult};
use octofhir_cql_elm::UnaryNode;
use octofhir_cql_types::{CqlList, CqlValue};

/// Decode a list operand
///
/// Returns `None` for a null operand and fails with a type mismatch for a
/// present operand that is not a list.
pub fn list_operand<'a, N: UnaryNode + ?Sized>(
    node: &N,
    operand: &'a CqlValue,
) -> EvalResult<Option<&'a CqlList>> {
    if operand.is_null() {
        return Ok(None);
    }
    operand
        .to_list()
        .map(Some)
        .map_err(|err| EvalError::from_value(node, err))
}

/// Iterate over the present elements of a list
pub fn present_elements(list: &CqlList) -> impl Iterator<Item = &CqlValue> {
    list.iter().filter(|elem| !elem.is_null())
}
